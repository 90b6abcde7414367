//! Every reason a judge run can end without `Accepted`.

use crate::verdict::Verdict;
use liftcheck_cipher::DecryptionError;
use liftcheck_dataset::InputError;
use liftcheck_replay::ReplayError;
use liftcheck_types::{Floor, FormatError, PassengerId};
use thiserror::Error;

/// A failed judge run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JudgeError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Encryption Error | Output is encrypted but no key is configured")]
    MissingDecryptor,

    #[error(transparent)]
    Decryption(#[from] DecryptionError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Wrong State | There is no floor {0}")]
    FloorOutOfRange(Floor),

    #[error(transparent)]
    Replay(#[from] ReplayError),

    #[error("Time Limit Exceeded | Your program exceeded max time limit.")]
    TimeLimitExceeded,

    #[error("Wrong Answer | Your elevator's door is not closed")]
    DoorNotClosed,

    #[error("Wrong Answer | Passenger {0} is still in the elevator")]
    PassengerStillInside(PassengerId),

    #[error("Wrong Answer | Passenger {0} has not arrived at his/her target floor yet")]
    PassengerNotDelivered(PassengerId),
}

impl JudgeError {
    /// Verdict category this failure is reported under.
    pub fn verdict(&self) -> Verdict {
        match self {
            JudgeError::Input(_) => Verdict::InvalidInput,
            JudgeError::MissingDecryptor | JudgeError::Decryption(_) => Verdict::EncryptionError,
            JudgeError::Format(_) => Verdict::OutputFormatError,
            JudgeError::TimeLimitExceeded => Verdict::TimeLimitExceeded,
            JudgeError::FloorOutOfRange(_)
            | JudgeError::Replay(_)
            | JudgeError::DoorNotClosed
            | JudgeError::PassengerStillInside(_)
            | JudgeError::PassengerNotDelivered(_) => Verdict::WrongAnswer,
        }
    }
}
