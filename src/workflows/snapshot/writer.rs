use std::io::Write;

use chrono::NaiveDate;

use crate::workflows::placement::domain::{Role, User};
use crate::workflows::placement::store::HubStore;

fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn joined(ids: impl IntoIterator<Item = String>) -> String {
    ids.into_iter().collect::<Vec<_>>().join(";")
}

fn user_record(store: &HubStore, user: &User) -> Vec<String> {
    let mut record = vec![
        user.role.label().to_string(),
        user.id.0.clone(),
        user.name.clone(),
        user.password.clone(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
    ];

    match &user.role {
        Role::Student(profile) => {
            record[4] = profile.year.to_string();
            record[5] = profile.major.clone();
            // only live applications, matching what the column held
            // when it was authoritative
            record[10] = joined(
                store
                    .applications_by_student(&user.id)
                    .iter()
                    .filter(|app| app.status.is_active())
                    .map(|app| app.internship_id.0.clone()),
            );
        }
        Role::Staff(profile) => {
            record[6] = profile.department.clone();
        }
        Role::CompanyRep(profile) => {
            record[6] = profile.company_name.clone();
            record[7] = profile.department.clone();
            record[8] = profile.position.clone();
            record[9] = profile.approved.to_string();
            record[10] = joined(
                store
                    .internships_by_rep(&user.id)
                    .iter()
                    .map(|posting| posting.id.0.clone()),
            );
        }
    }

    record
}

/// Writes the user table. Per-student applied lists and per-rep created
/// lists are derived from the application and internship tables so the
/// snapshot stays consistent with what is in memory.
pub fn write_users<W: Write>(output: W, store: &HubStore) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for user in store.users() {
        writer.write_record(user_record(store, user))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_internships<W: Write>(output: W, store: &HubStore) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for posting in store.internships() {
        let applicants = joined(
            store
                .roster(&posting.id)
                .into_iter()
                .map(|student_id| student_id.0),
        );
        writer.write_record([
            posting.id.0.clone(),
            posting.title.clone(),
            posting.description.clone(),
            posting.level.label().to_string(),
            posting.preferred_major.clone(),
            date_field(posting.open_date),
            date_field(posting.close_date),
            posting.company_name.clone(),
            posting.company_rep_id.0.clone(),
            posting.slots().to_string(),
            posting.visible.to_string(),
            posting.status.label().to_string(),
            posting.confirmed_count().to_string(),
            applicants,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_applications<W: Write>(output: W, store: &HubStore) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for application in store.applications() {
        writer.write_record([
            application.id.0.clone(),
            application.internship_id.0.clone(),
            application.student_id.0.clone(),
            application.status.label().to_string(),
            application.confirmed_by_student.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
