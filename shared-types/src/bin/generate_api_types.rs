use shared_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the marketplace UI
    let mut types = Vec::new();

    // User types
    types.push(clean_type(UserKind::export_to_string()?));
    types.push(clean_type(UserBase::export_to_string()?));
    types.push(clean_type(ClientProfile::export_to_string()?));
    types.push(clean_type(Availability::export_to_string()?));
    types.push(clean_type(PortfolioItem::export_to_string()?));
    types.push(clean_type(DeveloperProfile::export_to_string()?));
    types.push(clean_type(User::export_to_string()?));
    types.push(clean_type(RegisterRequest::export_to_string()?));
    types.push(clean_type(UpdateProfileRequest::export_to_string()?));

    // Project types
    types.push(clean_type(ProjectCategory::export_to_string()?));
    types.push(clean_type(ProjectStatus::export_to_string()?));
    types.push(clean_type(Budget::export_to_string()?));
    types.push(clean_type(Project::export_to_string()?));
    types.push(clean_type(CreateProjectRequest::export_to_string()?));
    types.push(clean_type(ProjectsResponse::export_to_string()?));
    types.push(clean_type(ProjectFilters::export_to_string()?));

    // Bid types
    types.push(clean_type(BidStatus::export_to_string()?));
    types.push(clean_type(MilestoneStatus::export_to_string()?));
    types.push(clean_type(Milestone::export_to_string()?));
    types.push(clean_type(Bid::export_to_string()?));
    types.push(clean_type(CreateBidRequest::export_to_string()?));
    types.push(clean_type(UpdateBidStatusRequest::export_to_string()?));

    // Notification types
    types.push(clean_type(NotificationType::export_to_string()?));
    types.push(clean_type(Notification::export_to_string()?));
    types.push(clean_type(CreateNotificationRequest::export_to_string()?));
    types.push(clean_type(NotificationsResponse::export_to_string()?));

    // Dashboard types
    types.push(clean_type(ActivityIcon::export_to_string()?));
    types.push(clean_type(ActivityItem::export_to_string()?));
    types.push(clean_type(ActivityResponse::export_to_string()?));
    types.push(clean_type(DeveloperStats::export_to_string()?));
    types.push(clean_type(ClientStats::export_to_string()?));
    types.push(clean_type(DashboardStats::export_to_string()?));

    types.push(clean_type(ErrorResponse::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../ui/src/api-types"));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// All types land in one file, so the per-type import lines ts-rs emits are
/// dropped along with its banner comment.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
