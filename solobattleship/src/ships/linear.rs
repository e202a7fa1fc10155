// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::{
    board::{BoardSize, Coordinate},
    ships::{Orientation, ShapeProjection},
};

/// A straight ship shape with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Get the cells this line covers when laid from `origin` along `orientation`, or
    /// `None` if any of them would fall off a board of the given size. Does not in any
    /// way account for whether cells are already occupied.
    pub fn project(
        &self,
        origin: Coordinate,
        orientation: Orientation,
        size: BoardSize,
    ) -> Option<ShapeProjection> {
        let far_end = orientation.advance(origin, self.0 - 1)?;
        if size.contains(&origin) && size.contains(&far_end) {
            Some(self.cells(origin, orientation).collect())
        } else {
            None
        }
    }

    /// Iterate the cells of this line without any bounds checks.
    pub(crate) fn cells(
        &self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> impl Iterator<Item = Coordinate> {
        (0..self.0).filter_map(move |step| orientation.advance(origin, step))
    }
}
