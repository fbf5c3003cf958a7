//! Demo dataset seeding.
//!
//! Loads a small staffing scenario through the service so every document
//! passes the same validation as API traffic. Seeding is skipped when the
//! store already holds documents.

use chrono::NaiveDate;
use roster_core::{
    Error, NewAssignment, NewEngineer, NewProject, ProjectStatus, Seniority, Staffing,
};
use tracing::{info, warn};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn engineer(
    name: &str,
    email: &str,
    skills: &[&str],
    seniority: Seniority,
    max_capacity: u32,
    department: &str,
) -> NewEngineer {
    NewEngineer {
        name: name.to_string(),
        email: email.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        seniority,
        max_capacity,
        department: department.to_string(),
    }
}

fn project(
    name: &str,
    description: &str,
    start: NaiveDate,
    end: NaiveDate,
    required_skills: &[&str],
    team_size: u32,
    status: ProjectStatus,
) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: description.to_string(),
        start_date: start,
        end_date: end,
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        team_size,
        status,
    }
}

/// Seed the demo dataset into an empty store.
pub fn seed_demo(staffing: &Staffing) -> Result<(), Error> {
    if !staffing.store().is_empty() {
        warn!("store already holds documents, skipping demo seed");
        return Ok(());
    }

    let alex = staffing.create_engineer(engineer(
        "Alex Rodriguez",
        "alex@company.com",
        &["React", "JavaScript", "TypeScript", "Node.js"],
        Seniority::Senior,
        100,
        "Frontend",
    ))?;
    let priya = staffing.create_engineer(engineer(
        "Priya Patel",
        "priya@company.com",
        &["Python", "Django", "AWS", "Machine Learning"],
        Seniority::Mid,
        100,
        "Backend",
    ))?;
    let james = staffing.create_engineer(engineer(
        "James Wilson",
        "james@company.com",
        &["React", "Node.js", "MongoDB", "Express"],
        Seniority::Junior,
        100,
        "Fullstack",
    ))?;
    let olivia = staffing.create_engineer(engineer(
        "Olivia Martinez",
        "olivia@company.com",
        &["React Native", "JavaScript", "UI/UX", "Firebase"],
        Seniority::Mid,
        50,
        "Mobile",
    ))?;

    let portal = staffing.create_project(project(
        "Customer Portal Redesign",
        "Rebuild the customer portal on the new design system",
        date(2025, 7, 15),
        date(2025, 12, 30),
        &["React", "TypeScript", "Node.js"],
        3,
        ProjectStatus::Planning,
    ))?;
    let analytics = staffing.create_project(project(
        "Data Analytics Platform",
        "Self-serve dashboards over the warehouse",
        date(2025, 6, 1),
        date(2025, 9, 30),
        &["Python", "Machine Learning", "AWS"],
        2,
        ProjectStatus::Active,
    ))?;
    let mobile = staffing.create_project(project(
        "Mobile App Development",
        "Native companion app for iOS and Android",
        date(2025, 8, 1),
        date(2026, 1, 31),
        &["React Native", "JavaScript", "Firebase"],
        2,
        ProjectStatus::Planning,
    ))?;
    let gateway = staffing.create_project(project(
        "API Gateway Implementation",
        "Single entry point in front of the service fleet",
        date(2025, 5, 1),
        date(2025, 7, 31),
        &["Node.js", "Express", "AWS"],
        2,
        ProjectStatus::Active,
    ))?;

    let assignments = [
        (alex.id, portal.id, 70, portal.start_date, portal.end_date, "Tech Lead"),
        (alex.id, gateway.id, 30, gateway.start_date, gateway.end_date, "Reviewer"),
        (priya.id, analytics.id, 80, analytics.start_date, analytics.end_date, "Data Engineer"),
        (james.id, portal.id, 50, portal.start_date, portal.end_date, "Developer"),
        (james.id, gateway.id, 50, gateway.start_date, gateway.end_date, "Developer"),
        (olivia.id, mobile.id, 50, mobile.start_date, mobile.end_date, "Mobile Developer"),
    ];
    for (engineer_id, project_id, allocation_percentage, start_date, end_date, role) in assignments
    {
        staffing.create_assignment(NewAssignment {
            engineer_id,
            project_id,
            allocation_percentage,
            start_date,
            end_date,
            role: role.to_string(),
        })?;
    }

    info!(engineers = 4, projects = 4, assignments = 6, "demo dataset seeded");
    Ok(())
}
