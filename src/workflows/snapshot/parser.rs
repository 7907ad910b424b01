use std::io::Read;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::warn;

use crate::workflows::placement::domain::{
    Application, ApplicationId, ApplicationStatus, CompanyRepProfile, Internship, InternshipId,
    InternshipLevel, InternshipStatus, Role, StaffProfile, StudentProfile, User, UserId,
};

fn reader_for<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("")
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(value = trimmed, "unparsable date in snapshot, treating as unset");
            None
        }
    }
}

fn parse_bool(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Loads user rows. The row layout is role-discriminated:
/// `type,id,name,password,year,major,affiliation,rep_department,position,approved,linked`
/// where `affiliation` carries the staff department or the rep's
/// company. The trailing `linked` ID list is accepted but ignored;
/// rosters and applied lists are re-derived from the application table.
pub fn load_users<R: Read>(input: R) -> Result<Vec<User>, csv::Error> {
    let mut users = Vec::new();

    for record in reader_for(input).records() {
        let record = record?;
        if record.len() < 4 {
            warn!(row = ?record.position().map(|p| p.line()), "short user row skipped");
            continue;
        }

        let id = UserId(field(&record, 1).to_string());
        let name = field(&record, 2).to_string();
        let password = field(&record, 3).to_string();

        let role = match field(&record, 0) {
            "Student" => {
                let year = field(&record, 4).parse().unwrap_or_else(|_| {
                    warn!(user = %id.0, "unparsable student year, defaulting to 1");
                    1
                });
                Role::Student(StudentProfile {
                    year,
                    major: field(&record, 5).to_string(),
                })
            }
            "Staff" => Role::Staff(StaffProfile {
                department: field(&record, 6).to_string(),
            }),
            "CompanyRep" => Role::CompanyRep(CompanyRepProfile {
                company_name: field(&record, 6).to_string(),
                department: field(&record, 7).to_string(),
                position: field(&record, 8).to_string(),
                approved: parse_bool(field(&record, 9)),
            }),
            other => {
                warn!(role = other, "unknown user role, row skipped");
                continue;
            }
        };

        users.push(User {
            id,
            name,
            password,
            filters: Default::default(),
            role,
        });
    }

    Ok(users)
}

/// Loads posting rows:
/// `id,title,description,level,preferred_major,open,close,company,rep_id,slots,visible,status,confirmed,applicants`.
/// The applicants column is re-derived, like user `linked` lists.
pub fn load_internships<R: Read>(input: R) -> Result<Vec<Internship>, csv::Error> {
    let mut internships = Vec::new();

    for record in reader_for(input).records() {
        let record = record?;
        if record.len() < 13 {
            warn!(row = ?record.position().map(|p| p.line()), "short internship row skipped");
            continue;
        }

        let id = InternshipId(field(&record, 0).to_string());
        let slots = field(&record, 9).parse().unwrap_or(1);
        let mut internship = Internship::new(
            id,
            field(&record, 1),
            field(&record, 2),
            InternshipLevel::parse_or_basic(field(&record, 3)),
            field(&record, 4),
            parse_date(field(&record, 5)),
            parse_date(field(&record, 6)),
            field(&record, 7),
            UserId(field(&record, 8).to_string()),
            slots,
        );

        internship.visible = parse_bool(field(&record, 10));
        if let Some(status) = InternshipStatus::parse(field(&record, 11)) {
            internship.status = status;
        } else {
            warn!(internship = %internship.id.0, "unknown posting status, keeping Pending");
        }
        internship.set_confirmed_count(field(&record, 12).parse().unwrap_or(0));

        internships.push(internship);
    }

    Ok(internships)
}

/// Loads application rows: `id,internship_id,student_id,status,confirmed`.
pub fn load_applications<R: Read>(input: R) -> Result<Vec<Application>, csv::Error> {
    let mut applications = Vec::new();

    for record in reader_for(input).records() {
        let record = record?;
        if record.len() < 5 {
            warn!(row = ?record.position().map(|p| p.line()), "short application row skipped");
            continue;
        }

        let mut application = Application::new(
            ApplicationId(field(&record, 0).to_string()),
            InternshipId(field(&record, 1).to_string()),
            UserId(field(&record, 2).to_string()),
        );
        if let Some(status) = ApplicationStatus::parse(field(&record, 3)) {
            application.status = status;
        } else {
            warn!(application = %application.id.0, "unknown application status, keeping Pending");
        }
        application.confirmed_by_student = parse_bool(field(&record, 4));

        applications.push(application);
    }

    Ok(applications)
}

/// First-run student roster seed: `id,name,major,year`. Accounts get
/// the default password.
pub fn seed_students<R: Read>(input: R) -> Result<Vec<User>, csv::Error> {
    let mut users = Vec::new();

    for record in reader_for(input).records() {
        let record = record?;
        if record.len() < 4 {
            continue;
        }

        let id = UserId(field(&record, 0).to_string());
        let year = field(&record, 3).parse().unwrap_or(1);
        users.push(User::new(
            id,
            field(&record, 1),
            "password",
            Role::Student(StudentProfile {
                year,
                major: field(&record, 2).to_string(),
            }),
        ));
    }

    Ok(users)
}

/// First-run staff roster seed: `id,name,email,department`.
pub fn seed_staff<R: Read>(input: R) -> Result<Vec<User>, csv::Error> {
    let mut users = Vec::new();

    for record in reader_for(input).records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }

        users.push(User::new(
            UserId(field(&record, 0).to_string()),
            field(&record, 1),
            "password",
            Role::Staff(StaffProfile {
                department: field(&record, 3).to_string(),
            }),
        ));
    }

    Ok(users)
}
