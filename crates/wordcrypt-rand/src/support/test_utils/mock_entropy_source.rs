// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// What a [`MockEntropySource`] does on `fill_bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Real OS randomness.
    None,
    /// Fails with [`EntropyError::EntropyNotAvailable`], leaving `dest` untouched.
    FailAtFillBytes,
    /// Every byte set to the given value.
    Constant(u8),
    /// Byte `i` set to `i mod 256`, for checking how bytes land in words.
    Sequence,
}

/// Switchable entropy source for exercising `WordArray::random_with` and its
/// error path.
pub struct MockEntropySource {
    system: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
}

impl MockEntropySource {
    /// Source with the given initial behaviour.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            system: SystemEntropySource {},
            behaviour,
        }
    }

    /// Switches behaviour for subsequent draws.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        match self.behaviour {
            MockEntropySourceBehaviour::None => self.system.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAtFillBytes => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::Constant(byte) => {
                dest.fill(byte);
                Ok(())
            }
            MockEntropySourceBehaviour::Sequence => {
                for (i, byte) in dest.iter_mut().enumerate() {
                    *byte = i as u8;
                }
                Ok(())
            }
        }
    }
}
