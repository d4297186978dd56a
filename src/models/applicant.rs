//! Applicant model.
//!
//! Only the parts of a user account that decide whether the leave form may
//! be used at all.

use serde::{Deserialize, Serialize};

/// The role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular employee.
    Employee,
    /// A manager; managers may apply for leave without an assigned manager.
    Manager,
    /// An administrator.
    Admin,
}

/// The person applying for leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Identifier of the user account.
    pub id: u64,
    /// The account role.
    pub role: Role,
    /// The manager the applicant reports to, if one is assigned.
    #[serde(default)]
    pub manager_id: Option<u64>,
}

impl Applicant {
    /// Returns true if someone can approve this applicant's leave.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{Applicant, Role};
    ///
    /// let employee = Applicant { id: 3, role: Role::Employee, manager_id: None };
    /// assert!(!employee.has_manager());
    ///
    /// let manager = Applicant { id: 4, role: Role::Manager, manager_id: None };
    /// assert!(manager.has_manager());
    /// ```
    pub fn has_manager(&self) -> bool {
        self.role == Role::Manager || self.manager_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_with_manager() {
        let json = r#"{"id": 9, "role": "employee", "manager_id": 2}"#;
        let applicant: Applicant = serde_json::from_str(json).unwrap();
        assert_eq!(applicant.role, Role::Employee);
        assert!(applicant.has_manager());
    }

    #[test]
    fn test_employee_without_manager_field() {
        let json = r#"{"id": 9, "role": "employee"}"#;
        let applicant: Applicant = serde_json::from_str(json).unwrap();
        assert_eq!(applicant.manager_id, None);
        assert!(!applicant.has_manager());
    }

    #[test]
    fn test_admin_needs_manager() {
        let admin = Applicant {
            id: 1,
            role: Role::Admin,
            manager_id: None,
        };
        assert!(!admin.has_manager());
    }
}
