// src/codec/binary.rs
//! Fixed binary layout for byte-buffer transport:
//!
//! ```text
//! offset 0  : i32 width   (big-endian)
//! offset 4  : i32 height  (big-endian)
//! offset 8..: width*height f64 values, row-major, big-endian
//! ```
//!
//! Required length is `8 + width*height*8`. Decoding never reads past
//! that, even when the buffer is longer.

use crate::error::MatrixError;
use crate::matrix::Matrix;

const HEADER_LEN: usize = 8;

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[offset..offset + 4]);
    i32::from_be_bytes(buf)
}

impl Matrix {
    /// Encode into the fixed binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.values().len() * 8);
        out.extend_from_slice(&(self.width() as i32).to_be_bytes());
        out.extend_from_slice(&(self.height() as i32).to_be_bytes());
        for value in self.values() {
            out.extend_from_slice(&value.to_be_bytes());
        }
        out
    }

    /// Decode a matrix from the fixed binary layout. The float bits are
    /// carried exactly, so encode/decode round trips are lossless.
    pub fn from_bytes(bytes: &[u8]) -> Result<Matrix, MatrixError> {
        if bytes.len() < HEADER_LEN {
            return Err(MatrixError::TruncatedBuffer {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }
        let width = read_i32(bytes, 0);
        let height = read_i32(bytes, 4);
        if width <= 0 || height <= 0 {
            return Err(MatrixError::MalformedInput(format!(
                "binary header declares a {}x{} matrix",
                width, height
            )));
        }
        let (width, height) = (width as usize, height as usize);
        // A hostile header can declare dimensions whose byte size does
        // not fit in usize; that must come back as an error value, not
        // an overflow panic.
        let expected = width
            .checked_mul(height)
            .and_then(|cells| cells.checked_mul(8))
            .and_then(|payload| payload.checked_add(HEADER_LEN));
        let Some(expected) = expected else {
            return Err(MatrixError::MalformedInput(format!(
                "binary header declares a {}x{} matrix, larger than any addressable buffer",
                width, height
            )));
        };
        if bytes.len() < expected {
            return Err(MatrixError::TruncatedBuffer {
                expected,
                actual: bytes.len(),
            });
        }
        let mut out = Matrix::zeroed(width, height);
        let mut offset = HEADER_LEN;
        for y in 0..height {
            for x in 0..width {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&bytes[offset..offset + 8]);
                out.set(x, y, f64::from_be_bytes(buf));
                offset += 8;
            }
        }
        Ok(out)
    }
}
