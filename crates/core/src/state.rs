use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mode {
    Shopping,
    Playing,
    End,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Shopping => "SHOPPING",
            Mode::Playing => "PLAYING",
            Mode::End => "END",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
