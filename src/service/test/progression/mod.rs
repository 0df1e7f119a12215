use crate::data::track_record::TrackRecordRepository;
use crate::data::user_status::UserStatusRepository;
use crate::error::{progression::ProgressionError, AppError};
use crate::model::category::{Category, Track};
use crate::model::progression::{CompleteTierParam, OverrideStatusParam, Promotion};
use crate::service::progression::ProgressionService;
use serde_json::json;
use test_utils::builder::TestBuilder;
use test_utils::factory::track_record::TrackRecordFactory;
use test_utils::factory::user_status::UserStatusFactory;

mod complete_tier;
mod override_status;
mod reset_progress;
