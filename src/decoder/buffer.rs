use super::error::DecodeError;

/// Bounded output buffer for one decode call
#[derive(Debug, Clone)]
pub struct MessageBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl MessageBuffer {
    /// Create an empty buffer holding at most `capacity` characters
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            len: 0,
            capacity,
        }
    }

    /// Append one character, refusing to grow past the capacity
    pub fn push(&mut self, c: char) -> Result<(), DecodeError> {
        if self.len >= self.capacity {
            return Err(DecodeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.text.push(c);
        self.len += 1;
        Ok(())
    }

    /// Characters written so far
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of characters
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current contents
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, returning its text
    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut buf = MessageBuffer::with_capacity(2);
        assert!(buf.is_empty());
        buf.push('A').unwrap();
        buf.push('B').unwrap();
        assert_eq!(
            buf.push('C'),
            Err(DecodeError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_str(), "AB");
        assert_eq!(buf.into_string(), "AB");
    }
}
