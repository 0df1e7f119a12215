use crate::data::track_record::TrackRecordRepository;
use crate::error::AppError;
use crate::model::category::{Category, Track};
use crate::model::track_record::{CompletedTiers, UpsertTrackRecordParam};
use test_utils::builder::TestBuilder;
use test_utils::factory::track_record::TrackRecordFactory;

mod delete_all_for_category;
