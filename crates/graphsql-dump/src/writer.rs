// Dweve GraphSQL - Property Graph to SQL Exporter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line-oriented script output.

use crate::dialect::banner;
use crate::error::Result;
use std::io::Write;

/// Writes a SQL script line by line.
///
/// Comment lines (`-- ...`) are dropped when comments are disabled. I/O
/// errors propagate immediately; nothing already written is rolled back.
#[derive(Debug)]
pub struct SqlWriter<W: Write> {
    inner: W,
    include_comments: bool,
    lines: usize,
}

impl<W: Write> SqlWriter<W> {
    /// Wrap a writer.
    pub fn new(inner: W, include_comments: bool) -> Self {
        Self {
            inner,
            include_comments,
            lines: 0,
        }
    }

    /// Write one line followed by a line break.
    pub fn line(&mut self, line: &str) -> Result<()> {
        if !self.include_comments && line.starts_with("--") {
            return Ok(());
        }
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Write several lines.
    pub fn lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line.as_ref())?;
        }
        Ok(())
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Write a three-line section banner.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        self.lines(banner(title))
    }

    /// Number of lines written so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
