//! Staff login against a fixed roster.
//!
//! Three demo accounts, one per role. There are no sessions or tokens: a
//! successful login only returns who the user is.

use serde::Serialize;

use crate::models::Role;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Identity returned on a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
    pub name: String,
}

struct StaffAccount {
    username: &'static str,
    password: &'static str,
    role: Role,
    name: &'static str,
}

const STAFF: [StaffAccount; 3] = [
    StaffAccount {
        username: "doctor",
        password: "doctor123",
        role: Role::Doctor,
        name: "Dr. Smith",
    },
    StaffAccount {
        username: "nurse",
        password: "nurse123",
        role: Role::Nurse,
        name: "Nurse Johnson",
    },
    StaffAccount {
        username: "admin",
        password: "admin123",
        role: Role::Administrator,
        name: "Admin Davis",
    },
];

// ═══════════════════════════════════════════════════════════
// Authentication
// ═══════════════════════════════════════════════════════════

/// Check credentials. Usernames and passwords are case-sensitive.
pub fn authenticate(username: &str, password: &str) -> Option<UserInfo> {
    let account = STAFF
        .iter()
        .find(|a| a.username == username && a.password == password)?;

    Some(UserInfo {
        username: account.username.to_string(),
        role: account.role,
        name: account.name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_account_logs_in_with_its_role() {
        let doctor = authenticate("doctor", "doctor123").unwrap();
        assert_eq!(doctor.role, Role::Doctor);
        assert_eq!(doctor.name, "Dr. Smith");

        assert_eq!(authenticate("nurse", "nurse123").unwrap().role, Role::Nurse);
        assert_eq!(
            authenticate("admin", "admin123").unwrap().name,
            "Admin Davis"
        );
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(authenticate("doctor", "nurse123").is_none());
        assert!(authenticate("doctor", "").is_none());
    }

    #[test]
    fn unknown_or_differently_cased_user_is_rejected() {
        assert!(authenticate("surgeon", "doctor123").is_none());
        assert!(authenticate("Doctor", "doctor123").is_none());
    }

    #[test]
    fn user_serializes_role_as_display_name() {
        let json = serde_json::to_value(authenticate("admin", "admin123").unwrap()).unwrap();
        assert_eq!(json["role"], "Administrator");
        assert_eq!(json["username"], "admin");
    }
}
