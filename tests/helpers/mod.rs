#![allow(dead_code)]

use std::io::{self, Read};

/// Reader that serves its input in fixed-size chunks, to exercise lines
/// split across multiple short reads.
pub struct ChunkReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
}

impl ChunkReader {
    pub fn new(data: &[u8], chunk: usize) -> ChunkReader {
        assert!(chunk > 0);
        ChunkReader {
            data: data.to_vec(),
            pos: 0,
            chunk,
        }
    }
}

impl Read for ChunkReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Ok(0);
        }
        let n = buf
            .len()
            .min(self.chunk)
            .min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Reader that serves some input and then fails with `BrokenPipe`.
pub struct FaultReader {
    data: Vec<u8>,
    pos: usize,
}

impl FaultReader {
    pub fn new(data: &[u8]) -> FaultReader {
        FaultReader {
            data: data.to_vec(),
            pos: 0,
        }
    }
}

impl Read for FaultReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "simulated fault"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
