//! Role based access control actions.

use serde::Deserialize;
use serde_json::Value;

use crate::{pathlist, Client, ParameterSet, ValueList};
use landscape_core::{Error, Result};

/// Role as returned by `GetRoles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Role {
    /// Numeric id of the role.
    pub key: u64,
    /// Name of the role.
    pub name: String,
    /// Description of the role.
    #[serde(default)]
    pub description: String,
    /// Permissions granted by the role.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Emails of the persons holding the role.
    #[serde(default)]
    pub persons: Vec<String>,
    /// Access groups the role applies to.
    #[serde(default)]
    pub access_groups: Vec<String>,
}

/// Arguments of `CreateAccessGroup`.
#[derive(Debug, Clone, Default)]
pub struct CreateAccessGroup {
    /// Name of the access group, required.
    pub name: String,
    /// Title of the access group.
    pub title: Option<String>,
    /// Parent access group of the new group.
    pub parent: Option<String>,
}

/// Arguments of `CreateRole`.
#[derive(Debug, Clone, Default)]
pub struct CreateRole {
    /// Name of the role, required.
    pub name: String,
    /// Description of the role.
    pub description: Option<String>,
}

impl Client {
    /// Get access groups of the account, only the given `names` if not empty.
    pub async fn get_access_groups(&self, names: impl Into<ValueList>) -> Result<Value> {
        self.fetch_value("GetAccessGroups", pathlist("names", names)).await
    }

    /// Get roles of the account, only the given `names` if not empty.
    pub async fn get_roles(&self, names: impl Into<ValueList>) -> Result<Vec<Role>> {
        self.fetch_json("GetRoles", pathlist("names", names)).await
    }

    /// Get all available permissions.
    pub async fn get_permissions(&self) -> Result<Value> {
        self.fetch_value("GetPermissions", ParameterSet::new()).await
    }

    /// Add access groups to a role.
    pub async fn add_access_groups_to_role(
        &self,
        name: &str,
        access_groups: impl Into<ValueList>,
    ) -> Result<Value> {
        self.fetch_value(
            "AddAccessGroupsToRole",
            role_params(name, "access_groups", access_groups),
        )
        .await
    }

    /// Add permissions to a role.
    pub async fn add_permissions_to_role(
        &self,
        name: &str,
        permissions: impl Into<ValueList>,
    ) -> Result<Value> {
        self.fetch_value(
            "AddPermissionsToRole",
            role_params(name, "permissions", permissions),
        )
        .await
    }

    /// Add persons, by email, to a role. Those persons will be granted the role.
    pub async fn add_persons_to_role(
        &self,
        name: &str,
        persons: impl Into<ValueList>,
    ) -> Result<Value> {
        self.fetch_value("AddPersonsToRole", role_params(name, "persons", persons))
            .await
    }

    /// Create a new access group.
    pub async fn create_access_group(&self, args: CreateAccessGroup) -> Result<Value> {
        require_name(&args.name)?;
        let params = ParameterSet::new()
            .with("name", args.name)
            .with_opt("title", args.title)
            .with_opt("parent", args.parent);

        self.fetch_value("CreateAccessGroup", params).await
    }

    /// Create a new role.
    pub async fn create_role(&self, args: CreateRole) -> Result<Value> {
        require_name(&args.name)?;
        let params = ParameterSet::new()
            .with("name", args.name)
            .with_opt("description", args.description);

        self.fetch_value("CreateRole", params).await
    }

    /// Remove an access group.
    pub async fn remove_access_group(&self, name: &str) -> Result<Value> {
        require_name(name)?;
        self.fetch_value("RemoveAccessGroup", ParameterSet::new().with("name", name))
            .await
    }

    /// Remove access groups from a role.
    pub async fn remove_access_groups_from_role(
        &self,
        name: &str,
        access_groups: impl Into<ValueList>,
    ) -> Result<Value> {
        self.fetch_value(
            "RemoveAccessGroupsFromRole",
            role_params(name, "access_groups", access_groups),
        )
        .await
    }

    /// Remove permissions from a role.
    pub async fn remove_permissions_from_role(
        &self,
        name: &str,
        permissions: impl Into<ValueList>,
    ) -> Result<Value> {
        self.fetch_value(
            "RemovePermissionsFromRole",
            role_params(name, "permissions", permissions),
        )
        .await
    }

    /// Some actions answer with an empty body on success.
    async fn fetch_value(&self, action: &str, params: ParameterSet) -> Result<Value> {
        let body = self.fetch(action, params).await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| {
            Error::protocol(format!("decode response of {action} failed: {e}")).with_source(e)
        })
    }
}

fn role_params(name: &str, key: &str, values: impl Into<ValueList>) -> ParameterSet {
    let mut params = ParameterSet::new().with("name", name);
    params.append(pathlist(key, values));
    params
}

fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::request_invalid("name must be provided"));
    }
    Ok(())
}
