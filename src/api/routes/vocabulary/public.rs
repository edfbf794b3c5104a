//! Public types for the vocabulary API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct VocabularyResponse {
    pub message: String,
}
