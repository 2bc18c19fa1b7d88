/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple in-memory byte reader
//!
//! The reader keeps a position into a borrowed slice, all reads
//! advance that position and reads past the end either return
//! an error or a zero, depending on the method used.

/// An in-memory reader over a borrowed slice of bytes
pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `stream`
    pub const fn new(stream: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream,
            position: 0
        }
    }
    /// Read a single byte, returning zero if we are at the end
    /// of the stream
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        let byte = self.stream.get(self.position).copied().unwrap_or(0);
        self.position = (self.position + 1).min(self.stream.len());
        byte
    }
    /// Read a single byte, or return an error if the stream is exhausted
    #[inline]
    pub fn get_u8_err(&mut self) -> Result<u8, &'static str> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err("No more bytes")
        }
    }
    /// Look at the next byte without consuming it
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }
    /// Move the position back by `num` bytes, saturating at the start
    #[inline]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }
    /// Move the position forward by `num` bytes, saturating at the end
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }
    /// Return true if there are no more bytes to read
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Return true if at least `num` bytes can still be read
    #[inline]
    pub const fn has(&self, num: usize) -> bool {
        self.stream.len().saturating_sub(self.position) >= num
    }
    /// Number of bytes left in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }
    #[inline]
    pub const fn get_position(&self) -> usize {
        self.position
    }
    /// Return a reference to the next `num` bytes and advance past them
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], &'static str> {
        if !self.has(num) {
            return Err("Not enough bytes");
        }
        let start = self.position;
        self.position += num;
        Ok(&self.stream[start..start + num])
    }
}
