// hospital_services/src/access/role_service.rs
//! Role management. Roles live for the session only and grant permission tags
//! from a fixed catalogue; nothing enforces them.
use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

use logging_service::{NotificationSink, Toast};
use models::errors::{FieldError, HospitalError, HospitalResult, ValidationError};
use models::{Identifier, Role, PERMISSION_CATALOGUE};
use schema::{FormSchema, RoleForm, RoleFormData, UserForm, UserFormData};

#[derive(Clone)]
pub struct RoleService {
    roles: Arc<RwLock<Vec<Role>>>,
    notifier: Arc<dyn NotificationSink>,
}

impl RoleService {
    pub fn new(roles: Vec<Role>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            roles: Arc::new(RwLock::new(roles)),
            notifier,
        }
    }

    pub fn permission_catalogue() -> &'static [&'static str] {
        &PERMISSION_CATALOGUE
    }

    pub async fn list(&self) -> Vec<Role> {
        self.roles.read().await.clone()
    }

    pub async fn get(&self, id: &Identifier) -> HospitalResult<Role> {
        self.roles
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| HospitalError::NotFound(id.clone()))
    }

    /// Sum of users across every role.
    pub async fn total_users(&self) -> u32 {
        self.roles.read().await.iter().map(|r| r.user_count).sum()
    }

    /// Appends a new role with no users. On a validation failure the list is untouched
    /// and the error carries one message per invalid field.
    pub async fn create_role(&self, form: &RoleFormData) -> HospitalResult<Role> {
        RoleForm::validate_data(form)?;
        let role = Role::new(form.name.clone(), form.description.clone(), permission_set(form));
        self.roles.write().await.push(role.clone());
        info!("Created role {} ({}) with {} permission(s)", role.name, role.id, role.permissions.len());
        self.notifier
            .notify(Toast::new("Role Created", format!("{} role has been created successfully.", role.name)))
            .await;
        Ok(role)
    }

    /// Replaces name, description and permissions. Id, user count and colour are kept.
    pub async fn edit_role(&self, id: &Identifier, form: &RoleFormData) -> HospitalResult<Role> {
        RoleForm::validate_data(form)?;
        let updated = {
            let mut roles = self.roles.write().await;
            let role = roles
                .iter_mut()
                .find(|r| &r.id == id)
                .ok_or_else(|| HospitalError::NotFound(id.clone()))?;
            role.name = form.name.clone();
            role.description = form.description.clone();
            role.permissions = permission_set(form);
            role.clone()
        };
        info!("Updated role {}", updated.id);
        self.notifier
            .notify(Toast::new("Role Updated", format!("{} role has been updated successfully.", updated.name)))
            .await;
        Ok(updated)
    }

    /// Removes the role. Users holding it are not reassigned.
    pub async fn delete_role(&self, id: &Identifier) -> HospitalResult<Role> {
        let removed = {
            let mut roles = self.roles.write().await;
            let pos = roles
                .iter()
                .position(|r| &r.id == id)
                .ok_or_else(|| HospitalError::NotFound(id.clone()))?;
            roles.remove(pos)
        };
        if removed.user_count > 0 {
            warn!("Deleted role {} still had {} user(s)", removed.name, removed.user_count);
        }
        self.notifier
            .notify(Toast::new("Role Deleted", "Role has been deleted successfully."))
            .await;
        Ok(removed)
    }

    /// Flips one permission on a role and returns whether the role now holds it.
    /// A role always keeps at least one permission.
    pub async fn toggle_permission(&self, id: &Identifier, permission: &str) -> HospitalResult<bool> {
        if !PERMISSION_CATALOGUE.contains(&permission) {
            return Err(HospitalError::InvalidRequest(format!("unknown permission '{}'", permission)));
        }
        let mut roles = self.roles.write().await;
        let role = roles
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| HospitalError::NotFound(id.clone()))?;
        if role.permissions.len() == 1 && role.has_permission(permission) {
            return Err(ValidationError::FormRejected(vec![FieldError::new(
                "permissions",
                "At least one permission is required",
            )])
            .into());
        }
        let granted = role.toggle_permission(permission);
        debug!("Role {} permission {} -> {}", role.name, permission, granted);
        Ok(granted)
    }

    /// Validates the user dialog and counts the new user against the matching role,
    /// if one exists. No account is created.
    pub async fn add_user(&self, form: &UserFormData) -> HospitalResult<()> {
        UserForm::validate_data(form)?;
        let full_name = format!("{} {}", form.first_name, form.last_name);
        {
            let mut roles = self.roles.write().await;
            match roles.iter_mut().find(|r| r.name.eq_ignore_ascii_case(&form.role)) {
                Some(role) => role.user_count += 1,
                None => debug!("No role named {} to count {} against", form.role, full_name),
            }
        }
        self.notifier
            .notify(Toast::new("User Added", format!("{} has been added as {}.", full_name, form.role)))
            .await;
        Ok(())
    }
}

fn permission_set(form: &RoleFormData) -> BTreeSet<String> {
    form.permissions.iter().cloned().collect()
}
