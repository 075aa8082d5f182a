// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Department management: contact details, keyword lists and match order.

use serde::Serialize;
use tracing::info;
use ward_core::{Action, Database, Department, Event, Issue, Recount};

use crate::cli::{ContactArgs, DeptCommand, OutputFormat};
use crate::display::{format_department_details, format_department_line, format_issue_line};
use crate::error::{Error, Result};
use crate::validate::{optional, validate_name, MAX_NAME_LENGTH};

use super::{apply_mutation, open_db};

/// Longest contact field (head, email, phone, hours).
const MAX_CONTACT_LENGTH: usize = 200;

pub fn run(cmd: DeptCommand) -> Result<()> {
    let (db, _, _) = open_db()?;
    match cmd {
        DeptCommand::Add {
            name,
            keywords,
            contact,
        } => add_impl(&db, &name, &keywords, &contact),
        DeptCommand::List { output } => list_impl(&db, output),
        DeptCommand::Show { name, output } => show_impl(&db, &name, output),
        DeptCommand::Edit { name, contact } => edit_impl(&db, &name, &contact),
        DeptCommand::Remove { name } => remove_impl(&db, &name).map(|_| ()),
        DeptCommand::Keywords {
            name,
            add,
            remove,
            clear,
        } => keywords_impl(&db, &name, &add, &remove, clear).map(|_| ()),
        DeptCommand::Move { name, position } => {
            move_impl(&db, &name, usize::try_from(position).unwrap_or(usize::MAX))
        }
        DeptCommand::Recount => recount_impl(&db).map(|_| ()),
    }
}

fn check_keywords(keywords: &[String]) -> Result<()> {
    for kw in keywords {
        let actual = kw.trim().chars().count();
        if actual > MAX_NAME_LENGTH {
            return Err(Error::FieldTooLong {
                field: "Keyword",
                actual,
                max: MAX_NAME_LENGTH,
            });
        }
    }
    Ok(())
}

fn contact_value(field: &'static str, value: Option<&str>) -> Result<Option<String>> {
    optional(field, value, MAX_CONTACT_LENGTH)
}

pub(crate) fn add_impl(
    db: &Database,
    name: &str,
    keywords: &[String],
    contact: &ContactArgs,
) -> Result<()> {
    let name = validate_name("Department name", name)?;
    check_keywords(keywords)?;
    let mut dept = Department::new(name).with_keywords(keywords);
    dept.head = contact_value("Head", contact.head.as_deref())?;
    dept.email = contact_value("Email", contact.email.as_deref())?;
    dept.phone = contact_value("Phone", contact.phone.as_deref())?;
    dept.working_hours = contact_value("Hours", contact.hours.as_deref())?;

    db.create_department(&dept)?;
    info!(department = %dept.name, keywords = dept.keywords.len(), "added department");
    println!(
        "Added department {} with {} keyword(s)",
        dept.name,
        dept.keywords.len()
    );
    Ok(())
}

pub(crate) fn list_impl(db: &Database, output: OutputFormat) -> Result<()> {
    let departments = db.list_departments()?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&departments)?),
        OutputFormat::Id => {
            for dept in &departments {
                println!("{}", dept.name);
            }
        }
        OutputFormat::Text => {
            if departments.is_empty() {
                println!("No departments");
            }
            for (i, dept) in departments.iter().enumerate() {
                println!("{}", format_department_line(i + 1, dept));
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct DepartmentDetails {
    #[serde(flatten)]
    department: Department,
    open_issues: Vec<Issue>,
}

pub(crate) fn show_impl(db: &Database, name: &str, output: OutputFormat) -> Result<()> {
    let department = db.get_department(name)?;
    let open_issues: Vec<Issue> = db
        .issues_for_department(&department.name)?
        .into_iter()
        .filter(|i| i.status.is_active())
        .collect();

    match output {
        OutputFormat::Json => {
            let details = DepartmentDetails {
                department,
                open_issues,
            };
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        OutputFormat::Id => println!("{}", department.name),
        OutputFormat::Text => {
            println!("{}", format_department_details(&department));
            if !open_issues.is_empty() {
                println!();
                println!("Active issues:");
                for issue in &open_issues {
                    println!("  {}", format_issue_line(issue));
                }
            }
        }
    }
    Ok(())
}

/// Apply a contact flag: absent keeps the value, blank clears it.
fn apply_contact(
    field: &'static str,
    current: &mut Option<String>,
    value: Option<&str>,
) -> Result<()> {
    if value.is_some() {
        *current = contact_value(field, value)?;
    }
    Ok(())
}

pub(crate) fn edit_impl(db: &Database, name: &str, contact: &ContactArgs) -> Result<()> {
    if contact.head.is_none()
        && contact.email.is_none()
        && contact.phone.is_none()
        && contact.hours.is_none()
    {
        return Err(Error::FieldRequired {
            field: "One of --head, --email, --phone or --hours",
        });
    }
    let mut dept = db.get_department(name)?;
    apply_contact("Head", &mut dept.head, contact.head.as_deref())?;
    apply_contact("Email", &mut dept.email, contact.email.as_deref())?;
    apply_contact("Phone", &mut dept.phone, contact.phone.as_deref())?;
    apply_contact("Hours", &mut dept.working_hours, contact.hours.as_deref())?;
    db.update_department_contact(&dept)?;
    info!(department = %dept.name, "updated department contact");
    println!("Updated {}", dept.name);
    Ok(())
}

/// Delete a department, logging an unassignment for each of its issues.
pub(crate) fn remove_impl(db: &Database, name: &str) -> Result<Vec<String>> {
    let canonical = db.get_department(name)?.name;
    let unassigned = db.remove_department(&canonical)?;
    for id in &unassigned {
        apply_mutation(
            db,
            Event::new(id.clone(), Action::Unassigned).with_values(Some(canonical.clone()), None),
        )?;
    }
    info!(department = %canonical, unassigned = unassigned.len(), "removed department");
    println!(
        "Removed {} ({} issue(s) unassigned)",
        canonical,
        unassigned.len()
    );
    Ok(unassigned)
}

pub(crate) fn keywords_impl(
    db: &Database,
    name: &str,
    add: &[String],
    remove: &[String],
    clear: bool,
) -> Result<Vec<String>> {
    let dept = db.get_department(name)?;
    let mut keywords = if clear { Vec::new() } else { dept.keywords };
    let removed: Vec<String> = remove.iter().map(|k| k.trim().to_lowercase()).collect();
    keywords.retain(|k| !removed.contains(k));
    keywords.extend(add.iter().cloned());

    check_keywords(&keywords)?;

    let stored = db.set_department_keywords(&dept.name, &keywords)?;
    info!(department = %dept.name, keywords = stored.len(), "updated keywords");
    if stored.is_empty() {
        println!("{} has no keywords", dept.name);
    } else {
        println!("{} keywords: {}", dept.name, stored.join(", "));
    }
    Ok(stored)
}

pub(crate) fn move_impl(db: &Database, name: &str, position: usize) -> Result<()> {
    let canonical = db.get_department(name)?.name;
    db.move_department(&canonical, position)?;
    let order = db.list_departments()?;
    let actual = order
        .iter()
        .position(|d| d.name == canonical)
        .map_or(position, |i| i + 1);
    info!(department = %canonical, position = actual, "moved department");
    println!("Moved {} to position {}", canonical, actual);
    Ok(())
}

pub(crate) fn recount_impl(db: &Database) -> Result<Vec<Recount>> {
    let results = db.recount_departments()?;
    let changed: Vec<&Recount> = results.iter().filter(|r| r.changed()).collect();
    for r in &changed {
        println!(
            "{}: assigned {} -> {}, resolved {} -> {}",
            r.name, r.before.0, r.after.0, r.before.1, r.after.1
        );
    }
    if changed.is_empty() {
        println!("All {} department counter(s) are correct", results.len());
    } else {
        info!(fixed = changed.len(), "recounted departments");
    }
    Ok(results)
}

#[cfg(test)]
#[path = "dept_tests.rs"]
mod tests;
