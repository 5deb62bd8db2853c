use crate::core::library::{self, Book};

/// Book metadata for the shelf view.
#[tauri::command]
pub fn list_books() -> Vec<Book> {
    library::catalog()
}
