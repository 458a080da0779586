use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Lifecycle state of a staking key.
///
/// ```text
/// Available -> Staking -> Staked -> Unstaking -> Unstaked
///                 |          |
///                 v          v
///            StakeFailed  AttentionNeeded <-> RemediationFailed
/// ```
///
/// Both remediation states can be reset back to `Staked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyState {
    Available,
    Staking,
    Staked,
    StakeFailed,
    Unstaking,
    Unstaked,
    AttentionNeeded,
    RemediationFailed,
}

impl KeyState {
    pub const ALL: [KeyState; 8] = [
        KeyState::Available,
        KeyState::Staking,
        KeyState::Staked,
        KeyState::StakeFailed,
        KeyState::Unstaking,
        KeyState::Unstaked,
        KeyState::AttentionNeeded,
        KeyState::RemediationFailed,
    ];

    pub fn can_transition_to(self, next: KeyState) -> bool {
        use KeyState::*;

        matches!(
            (self, next),
            (Available, Staking)
                | (Staking, Staked)
                | (Staking, StakeFailed)
                | (StakeFailed, Available)
                | (StakeFailed, Staking)
                | (Staked, Unstaking)
                | (Staked, AttentionNeeded)
                | (AttentionNeeded, Staked)
                | (AttentionNeeded, RemediationFailed)
                | (AttentionNeeded, Unstaking)
                | (RemediationFailed, Staked)
                | (RemediationFailed, AttentionNeeded)
                | (Unstaking, Unstaked)
        )
    }

    pub fn transition(self, next: KeyState) -> Result<KeyState> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(Error::InvalidKeyTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_remediation(self) -> bool {
        matches!(self, KeyState::AttentionNeeded | KeyState::RemediationFailed)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, KeyState::Unstaked)
    }

    fn as_str(self) -> &'static str {
        match self {
            KeyState::Available => "Available",
            KeyState::Staking => "Staking",
            KeyState::Staked => "Staked",
            KeyState::StakeFailed => "StakeFailed",
            KeyState::Unstaking => "Unstaking",
            KeyState::Unstaked => "Unstaked",
            KeyState::AttentionNeeded => "AttentionNeeded",
            KeyState::RemediationFailed => "RemediationFailed",
        }
    }
}

impl Display for KeyState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        KeyState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown key state: {s}"))
    }
}
