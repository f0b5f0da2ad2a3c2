//! AnkiConnect action names used by this server.

pub const DECK_NAMES: &str = "deckNames";
pub const DECK_NAMES_AND_IDS: &str = "deckNamesAndIds";
pub const MODEL_NAMES: &str = "modelNames";
pub const MODEL_NAMES_AND_IDS: &str = "modelNamesAndIds";
pub const FIND_MODELS_BY_ID: &str = "findModelsById";
pub const FIND_MODELS_BY_NAME: &str = "findModelsByName";
pub const ADD_NOTE: &str = "addNote";
pub const ADD_NOTES: &str = "addNotes";
