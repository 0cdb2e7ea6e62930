//! Zugangsdaten: Registrierung und Anmeldung mit Argon2id-Hashes.
//!
//! Klartext-Passwörter werden nie gespeichert oder geloggt.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Mindestlänge eines Passworts.
pub const MIN_PASSWORD_LEN: usize = 8;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Fehler des Zugangsdaten-Dienstes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Leere Felder, ungültige E-Mail, schwaches Passwort
    #[error("{0}")]
    InvalidInput(String),
    /// E-Mail bereits registriert
    #[error("An account with this email already exists")]
    Conflict,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Credential storage failed: {0}")]
    Storage(String),
}

/// Vertrag des Zugangsdaten-Dienstes.
pub trait CredentialStore: Send {
    fn signup(&mut self, email: &str, password: &str) -> Result<(), CredentialError>;
    fn login(&self, email: &str, password: &str) -> Result<(), CredentialError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountFile {
    accounts: IndexMap<String, String>,
}

/// Zugangsdaten im Speicher, optional als JSON-Datei persistiert.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    /// normalisierte E-Mail → PHC-Hash
    accounts: IndexMap<String, String>,
    path: Option<PathBuf>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt Konten aus `path` (fehlende Datei = leer) und schreibt Änderungen dorthin zurück.
    pub fn with_persistence(path: &Path) -> anyhow::Result<Self> {
        let accounts = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str::<AccountFile>(&content)?.accounts,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };
        log::info!(
            "{} Konten geladen aus: {}",
            accounts.len(),
            path.display()
        );
        Ok(Self {
            accounts,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn persist(&self) -> Result<(), CredentialError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file = AccountFile {
            accounts: self.accounts.clone(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| CredentialError::Storage(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| CredentialError::Storage(e.to_string()))
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn signup(&mut self, email: &str, password: &str) -> Result<(), CredentialError> {
        let key = normalize_email(email);
        if key.is_empty() || password.is_empty() {
            return Err(CredentialError::InvalidInput(
                "Email and password are required".into(),
            ));
        }
        if !is_valid_email(&key) {
            return Err(CredentialError::InvalidInput(
                "Please enter a valid email address".into(),
            ));
        }
        check_password_strength(password)?;
        if self.accounts.contains_key(&key) {
            return Err(CredentialError::Conflict);
        }

        let hash = hash_password(password)?;
        self.accounts.insert(key.clone(), hash);
        if let Err(e) = self.persist() {
            self.accounts.shift_remove(&key);
            return Err(e);
        }
        log::info!("Konto registriert: {}", key);
        Ok(())
    }

    fn login(&self, email: &str, password: &str) -> Result<(), CredentialError> {
        let key = normalize_email(email);
        if key.is_empty() || password.is_empty() {
            return Err(CredentialError::InvalidInput(
                "Email and password are required".into(),
            ));
        }
        let hash = self
            .accounts
            .get(&key)
            .ok_or(CredentialError::InvalidCredentials)?;
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(CredentialError::InvalidCredentials)
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Prüft die E-Mail-Syntax (lokaler Teil, `@`, Domain mit Punkt).
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Mindestens 8 Zeichen, ein Buchstabe und eine Ziffer.
pub fn check_password_strength(password: &str) -> Result<(), CredentialError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(CredentialError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters and contain a letter and a digit"
        )))
    }
}

fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Storage(format!("Failed to hash password: {e}")))
}

fn verify_password(password: &str, hash: &str) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        log::warn!("Gespeicherter Passwort-Hash ungültig: {}", e);
        CredentialError::Storage(format!("Invalid password hash format: {e}"))
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
