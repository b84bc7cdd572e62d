//! Everything this app keeps in the session cookie: the CSRF token, the
//! one-shot flash message and the drill-down selection.

pub mod csrf;

use actix_session::Session;

use crate::errors::AppError;
use crate::models::selection::SelectionState;

const FLASH_KEY: &str = "flash";
const SELECTION_KEY: &str = "selection";

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) -> Result<(), AppError> {
    session.insert(FLASH_KEY, message)?;
    Ok(())
}

/// A missing or unreadable selection is treated as nothing selected.
pub fn load_selection(session: &Session) -> SelectionState {
    match session.get::<SelectionState>(SELECTION_KEY) {
        Ok(state) => state.unwrap_or_default(),
        Err(e) => {
            log::warn!("Discarding unreadable selection state: {e}");
            SelectionState::default()
        }
    }
}

pub fn store_selection(session: &Session, state: &SelectionState) -> Result<(), AppError> {
    session.insert(SELECTION_KEY, state)?;
    Ok(())
}
