// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Platform user management.

use tracing::info;
use ward_core::{Database, Role, Source, User, UserStatus};

use crate::cli::{OutputFormat, UserCommand};
use crate::display::{format_user_details, format_user_line};
use crate::error::{Error, Result};
use crate::validate::{optional, required, validate_name, MAX_NAME_LENGTH};

use super::{for_each_id, open_db};

const MAX_EMAIL_LENGTH: usize = 254;

/// Fields for `user add`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub source: String,
    pub pending: bool,
}

/// Filters for `user list`. Values in each list are OR'd.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub roles: Vec<String>,
    pub statuses: Vec<String>,
    pub sources: Vec<String>,
    pub search: Option<String>,
}

pub fn run(cmd: UserCommand) -> Result<()> {
    let (db, _, _) = open_db()?;
    match cmd {
        UserCommand::Add {
            id,
            email,
            name,
            role,
            source,
            pending,
        } => add_impl(
            &db,
            NewUser {
                id,
                email,
                name,
                role,
                source,
                pending,
            },
        ),
        UserCommand::List {
            role,
            status,
            source,
            search,
            output,
        } => {
            let filter = UserFilter {
                roles: role,
                statuses: status,
                sources: source,
                search,
            };
            list_impl(&db, &filter, output)
        }
        UserCommand::Show { user, output } => show_impl(&db, &user, output),
        UserCommand::Block { users } => {
            for_each_id(&users, |u| set_status(&db, u, UserStatus::Blocked))
        }
        UserCommand::Unblock { users } => {
            for_each_id(&users, |u| unblock(&db, u))
        }
        UserCommand::Approve { users } => for_each_id(&users, |u| approve(&db, u)),
        UserCommand::Role { user, role } => role_impl(&db, &user, &role),
    }
}

fn validate_email(email: &str) -> Result<String> {
    let email = required("Email", email, MAX_EMAIL_LENGTH)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(Error::InvalidValue {
            field: "email",
            reason: format!("'{}' is not an email address", email),
        }),
    }
}

pub(crate) fn add_impl(db: &Database, input: NewUser) -> Result<()> {
    let id = validate_name("User id", &input.id)?;
    let email = validate_email(&input.email)?;
    let name = optional("Name", input.name.as_deref(), MAX_NAME_LENGTH)?
        .unwrap_or_else(|| id.clone());

    let mut user = User::new(id, email, name);
    user.role = input.role.parse()?;
    user.source = input.source.parse()?;
    if input.pending {
        user.status = UserStatus::Pending;
    }

    db.create_user(&user)?;
    info!(user = %user.id, role = %user.role, "added user");
    println!("Added {} {} ({})", user.role, user.id, user.status);
    Ok(())
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>>
where
    T: std::str::FromStr<Err = ward_core::Error>,
{
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.parse::<T>().map_err(Error::from))
        .collect()
}

/// Apply the list filter, keeping store order (newest last).
pub(crate) fn select(db: &Database, filter: &UserFilter) -> Result<Vec<User>> {
    let roles: Vec<Role> = parse_all(&filter.roles)?;
    let statuses: Vec<UserStatus> = parse_all(&filter.statuses)?;
    let sources: Vec<Source> = parse_all(&filter.sources)?;
    let needle = filter
        .search
        .as_ref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let users = db
        .list_users()?
        .into_iter()
        .filter(|u| roles.is_empty() || roles.contains(&u.role))
        .filter(|u| statuses.is_empty() || statuses.contains(&u.status))
        .filter(|u| sources.is_empty() || sources.contains(&u.source))
        .filter(|u| match &needle {
            None => true,
            Some(q) => [&u.id, &u.email, &u.display_name]
                .iter()
                .any(|field| field.to_lowercase().contains(q.as_str())),
        })
        .collect();
    Ok(users)
}

pub(crate) fn list_impl(db: &Database, filter: &UserFilter, output: OutputFormat) -> Result<()> {
    let users = select(db, filter)?;
    match output {
        OutputFormat::Text => {
            if users.is_empty() {
                println!("No users");
            }
            for user in &users {
                println!("{}", format_user_line(user));
            }
        }
        OutputFormat::Id => {
            for user in &users {
                println!("{}", user.id);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&users)?),
    }
    Ok(())
}

pub(crate) fn show_impl(db: &Database, user: &str, output: OutputFormat) -> Result<()> {
    let user = db.get_user(user)?;
    match output {
        OutputFormat::Text => println!("{}", format_user_details(&user)),
        OutputFormat::Id => println!("{}", user.id),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
    }
    Ok(())
}

pub(crate) fn set_status(db: &Database, user: &str, status: UserStatus) -> Result<()> {
    let old = db.set_user_status(user, status)?;
    if old == status {
        println!("{} is already {}", user, status);
        return Ok(());
    }
    info!(user, from = %old, to = %status, "changed user status");
    println!("{} {} -> {}", user, old, status);
    Ok(())
}

/// Activate a pending account. Blocked accounts must be unblocked instead.
pub(crate) fn approve(db: &Database, user: &str) -> Result<()> {
    let current = db.get_user(user)?;
    match current.status {
        UserStatus::Pending => set_status(db, user, UserStatus::Active),
        UserStatus::Active => {
            println!("{} is already active", user);
            Ok(())
        }
        UserStatus::Blocked => Err(Error::InvalidValue {
            field: "status",
            reason: format!("{} is blocked; use 'ward user unblock'", user),
        }),
    }
}

/// Reactivate a blocked account. Pending accounts are left for approval.
pub(crate) fn unblock(db: &Database, user: &str) -> Result<()> {
    let current = db.get_user(user)?;
    if current.status != UserStatus::Blocked {
        println!("{} is not blocked ({})", user, current.status);
        return Ok(());
    }
    set_status(db, user, UserStatus::Active)
}

pub(crate) fn role_impl(db: &Database, user: &str, role: &str) -> Result<()> {
    let role: Role = role.parse()?;
    let old = db.set_user_role(user, role)?;
    if old == role {
        println!("{} is already {}", user, role);
    } else {
        info!(user, from = %old, to = %role, "changed user role");
        println!("{} {} -> {}", user, old, role);
    }
    Ok(())
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
