use std::collections::HashMap;

use pagevault_types::UserIdentity;

/// One credential entry: an identity plus its password digest.
#[derive(Clone, Debug)]
struct Credential {
    user: UserIdentity,
    password_digest: String,
}

/// A small static credential table.
///
/// Passwords are never stored: entries hold a domain-separated BLAKE3
/// digest, and verification compares digests. The table is the "local"
/// identity provider; a remote provider would sit in front of it the
/// same way the remote store tier sits in front of the embedded one.
#[derive(Clone, Debug, Default)]
pub struct CredentialTable {
    entries: HashMap<String, Credential>,
}

fn digest(password: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"pagevault-credential-v1:");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize().as_bytes())
}

fn identity(
    id: &str,
    email: &str,
    name: &str,
    role: &str,
    permissions: &[&str],
) -> UserIdentity {
    UserIdentity {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

impl CredentialTable {
    /// An empty table: every login fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in demo accounts used by development installations.
    pub fn demo() -> Self {
        let mut table = Self::empty();
        table.insert(
            identity(
                "admin-001",
                "admin@coworking.com",
                "Admin User",
                "admin",
                &["read", "write", "publish", "settings"],
            ),
            "admin123",
        );
        table.insert(
            identity(
                "manager-001",
                "manager@coworking.com",
                "Manager User",
                "manager",
                &["read", "write", "publish"],
            ),
            "manager123",
        );
        table.insert(
            identity(
                "editor-001",
                "editor@coworking.com",
                "Editor User",
                "editor",
                &["read", "write"],
            ),
            "editor123",
        );
        table
    }

    /// Add or replace the entry for `user.email`.
    pub fn insert(&mut self, user: UserIdentity, password: &str) {
        self.entries.insert(
            user.email.clone(),
            Credential {
                user,
                password_digest: digest(password),
            },
        );
    }

    /// Verify an email/password pair, yielding the identity on success.
    pub fn verify(&self, email: &str, password: &str) -> Option<UserIdentity> {
        let entry = self.entries.get(email)?;
        if entry.password_digest == digest(password) {
            Some(entry.user.clone())
        } else {
            None
        }
    }

    /// Number of known identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
