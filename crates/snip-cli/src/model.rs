use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SaveOutput {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GetOutput {
    pub alias: String,
    pub url: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeleteOutput {
    pub alias: String,
}

/// What a command prints on success, one JSON object per run.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Saved(SaveOutput),
    Resolved(GetOutput),
    Deleted(DeleteOutput),
}
