// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::note::Note;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateNoteDto {
    #[validate(length(min = 1, message = "Note text cannot be empty"))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NoteDto {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            text: note.text,
            created_at: note.created_at,
        }
    }
}
