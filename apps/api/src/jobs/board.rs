//! Kanban board — groups job postings into one column per pipeline stage.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::currency::{format_salary_range, resolve_currency_symbol, CurrencyIcon, CurrencySymbol};
use crate::jobs::models::{JobPosting, JobStatus};

/// A single card on the board.
#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub currency: CurrencySymbol,
    pub currency_icon: CurrencyIcon,
    pub salary: Option<String>,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: JobStatus,
    pub title: &'static str,
    pub cards: Vec<JobCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Board {
    pub columns: Vec<BoardColumn>,
    pub total: usize,
}

impl From<&JobPosting> for JobCard {
    fn from(job: &JobPosting) -> Self {
        let location = job.location.as_deref();
        let currency = resolve_currency_symbol(location);
        JobCard {
            id: job.id,
            company: job.company.clone(),
            title: job.title.clone(),
            location: job.location.clone(),
            currency,
            currency_icon: currency.icon(),
            salary: format_salary_range(location, job.salary_min, job.salary_max),
            url: job.url.clone(),
            created_at: job.created_at,
        }
    }
}

/// Builds the board: every status gets a column (empty ones included), in
/// `JobStatus::ALL` order, and each column keeps the input order of its jobs.
pub fn build_board(jobs: &[JobPosting]) -> Board {
    let columns = JobStatus::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            title: status.title(),
            cards: jobs
                .iter()
                .filter(|job| job.status == status)
                .map(JobCard::from)
                .collect(),
        })
        .collect();

    Board {
        columns,
        total: jobs.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job(company: &str, status: JobStatus, location: Option<&str>) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            company: company.to_string(),
            title: "Software Engineer".to_string(),
            location: location.map(str::to_string),
            salary_min: Some(50_000),
            salary_max: Some(70_000),
            status,
            url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_board_has_all_columns() {
        let board = build_board(&[]);
        assert_eq!(board.total, 0);
        assert_eq!(board.columns.len(), JobStatus::ALL.len());
        assert!(board.columns.iter().all(|c| c.cards.is_empty()));
    }

    #[test]
    fn test_columns_follow_status_order() {
        let board = build_board(&[]);
        let statuses: Vec<JobStatus> = board.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, JobStatus::ALL.to_vec());
        assert_eq!(board.columns[2].title, "Interviewing");
    }

    #[test]
    fn test_jobs_grouped_by_status_in_input_order() {
        let jobs = vec![
            make_job("Acme", JobStatus::Applied, None),
            make_job("Globex", JobStatus::Offer, None),
            make_job("Initech", JobStatus::Applied, None),
        ];
        let board = build_board(&jobs);

        assert_eq!(board.total, 3);
        let applied = &board.columns[1];
        assert_eq!(applied.status, JobStatus::Applied);
        let companies: Vec<&str> = applied.cards.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(companies, vec!["Acme", "Initech"]);
        assert_eq!(board.columns[3].cards.len(), 1);
        assert!(board.columns[0].cards.is_empty());
    }

    #[test]
    fn test_card_currency_follows_location() {
        let jobs = vec![
            make_job("Monzo", JobStatus::Wishlist, Some("London, UK")),
            make_job("Stripe", JobStatus::Wishlist, Some("San Francisco, CA")),
        ];
        let board = build_board(&jobs);
        let cards = &board.columns[0].cards;

        assert_eq!(cards[0].currency, CurrencySymbol::Pound);
        assert_eq!(cards[0].currency_icon, CurrencyIcon::PoundSterling);
        assert_eq!(cards[0].salary.as_deref(), Some("£50,000 - £70,000"));

        assert_eq!(cards[1].currency, CurrencySymbol::Dollar);
        assert_eq!(cards[1].currency_icon, CurrencyIcon::DollarSign);
        assert_eq!(cards[1].salary.as_deref(), Some("$50,000 - $70,000"));
    }

    #[test]
    fn test_card_without_location_defaults_to_dollar() {
        let mut job = make_job("Hooli", JobStatus::Rejected, None);
        job.salary_min = None;
        job.salary_max = None;
        let card = JobCard::from(&job);
        assert_eq!(card.currency, CurrencySymbol::Dollar);
        assert!(card.salary.is_none());
    }
}
