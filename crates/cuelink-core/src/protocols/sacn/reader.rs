use super::error::DecodeError;

pub struct SacnReader<'a> {
    payload: &'a [u8],
}

impl<'a> SacnReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(DecodeError::Truncated {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DecodeError::Truncated {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, DecodeError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(DecodeError::Truncated {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, DecodeError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(DecodeError::Truncated {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.payload.get(range.clone()).ok_or(DecodeError::Truncated {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    pub fn read_array<const N: usize>(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| DecodeError::Truncated {
            needed: N,
            actual: bytes.len(),
        })
    }
}
