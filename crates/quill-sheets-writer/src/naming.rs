//! Sheet name validation and uniqueness
//!
//! Sheets never check their own names. They hold a [`SharedRegistrar`] and ask it
//! to validate a candidate, then to register it once stored. Uniqueness is scoped
//! by workbook id, so one registry can serve several workbooks without their
//! names colliding.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use quill_sheets_core::MAX_SHEET_NAME_LEN;

use crate::error::{Error, Result, SheetNameViolation};

/// Characters Excel refuses in sheet names
pub const FORBIDDEN_NAME_CHARS: &[char] = &['\\', '/', '?', '*', ':', '[', ']'];

/// Identifies one sheet to the registrar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetIdentity<'a> {
    /// Workbook that scopes the name
    pub workbook_id: &'a str,
    /// Position of the sheet in that workbook
    pub index: usize,
}

/// Validates and records sheet names on behalf of sheets
pub trait SheetNameRegistrar: fmt::Debug {
    /// Open a uniqueness scope for `workbook_id`
    fn mark_workbook_id_as_used(&mut self, workbook_id: &str);

    /// Fail with [`Error::InvalidSheetName`] if `name` cannot be given to `sheet`
    fn validate(&self, name: &str, sheet: SheetIdentity<'_>) -> Result<()>;

    /// Record `name` as taken by `sheet`, releasing whatever it held before
    fn register(&mut self, name: &str, sheet: SheetIdentity<'_>);
}

/// Handle through which sheets reach their registrar
pub type SharedRegistrar = Rc<RefCell<dyn SheetNameRegistrar>>;

/// In-memory registrar keyed by workbook id
///
/// Names are compared case-insensitively, the way Excel compares them.
#[derive(Debug, Default)]
pub struct SheetNameRegistry {
    scopes: AHashMap<String, BTreeMap<usize, String>>,
}

impl SheetNameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry behind `Rc<RefCell<..>>`
    ///
    /// The concrete type is kept so callers can still inspect the registry;
    /// clones coerce to [`SharedRegistrar`] wherever a sheet expects one.
    pub fn shared() -> Rc<RefCell<SheetNameRegistry>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Check if `workbook_id` has been marked as used
    pub fn is_workbook_id_used(&self, workbook_id: &str) -> bool {
        self.scopes.contains_key(workbook_id)
    }

    /// Registered names for a workbook, ordered by sheet index
    pub fn names(&self, workbook_id: &str) -> Vec<&str> {
        self.scopes
            .get(workbook_id)
            .map(|names| names.values().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Find the sheet index holding `name` in a workbook
    pub fn find(&self, workbook_id: &str, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.scopes.get(workbook_id).and_then(|names| {
            names
                .iter()
                .find(|(_, existing)| existing.to_lowercase() == wanted)
                .map(|(&index, _)| index)
        })
    }
}

/// Check the rules that do not depend on other sheets
pub fn check_name_format(name: &str) -> std::result::Result<(), SheetNameViolation> {
    if name.is_empty() {
        return Err(SheetNameViolation::Empty);
    }

    let len = name.chars().count();
    if len > MAX_SHEET_NAME_LEN {
        return Err(SheetNameViolation::TooLong(len));
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(SheetNameViolation::ForbiddenCharacter(c));
    }

    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(SheetNameViolation::ApostropheAtBoundary);
    }

    Ok(())
}

impl SheetNameRegistrar for SheetNameRegistry {
    fn mark_workbook_id_as_used(&mut self, workbook_id: &str) {
        if !self.scopes.contains_key(workbook_id) {
            log::trace!("opening sheet name scope for workbook {}", workbook_id);
            self.scopes.insert(workbook_id.to_string(), BTreeMap::new());
        }
    }

    fn validate(&self, name: &str, sheet: SheetIdentity<'_>) -> Result<()> {
        check_name_format(name).map_err(|reason| Error::invalid_name(name, reason))?;

        match self.find(sheet.workbook_id, name) {
            Some(owner) if owner != sheet.index => Err(Error::invalid_name(
                name,
                SheetNameViolation::Duplicate(owner),
            )),
            _ => Ok(()),
        }
    }

    fn register(&mut self, name: &str, sheet: SheetIdentity<'_>) {
        self.scopes
            .entry(sheet.workbook_id.to_string())
            .or_default()
            .insert(sheet.index, name.to_string());
    }
}
