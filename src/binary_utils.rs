use crate::error::{Error, Result};

pub fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    data.get(offset).copied().ok_or(Error::InputTooShort {
        needed: offset + 1,
        actual: data.len(),
    })
}

pub fn read_slice(data: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    let end = offset + length;
    data.get(offset..end).ok_or(Error::InputTooShort {
        needed: end,
        actual: data.len(),
    })
}

/// Checks that `data` holds at least `needed` bytes before any fixed-offset reads.
pub fn ensure_len(data: &[u8], needed: usize) -> Result<()> {
    if data.len() < needed {
        return Err(Error::InputTooShort {
            needed,
            actual: data.len(),
        });
    }
    Ok(())
}
