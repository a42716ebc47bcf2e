// src/rotation/messages.rs

//! Category-balanced daily message selection.
//!
//! One seed per (day, mode) drives a separate shuffle of each category's
//! pool. Within a category the window position comes from
//! `day_of_year mod 30`; each category is then pushed `7 * category_index`
//! slots further so categories don't move in lockstep.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::content::{ContentItem, ItemCategory, ItemMetadata, dated_item_id};
use crate::errors::Result;
use crate::pool::{MESSAGE_POOL_LIMIT, ModePools};
use crate::rotation::seed::PeriodKey;
use crate::rotation::shuffle::shuffle;
use crate::rotation::window::{ROTATION_CYCLE_DAYS, check_count, message_index, rotation_day};
use crate::types::{ContentKind, MessageCategory, RelationshipMode};

/// Exactly `per_category` messages for each of the five categories, in
/// category order.
pub fn daily_messages(
    mode: RelationshipMode,
    pools: &ModePools,
    per_category: usize,
    today: NaiveDate,
) -> Result<Vec<ContentItem>> {
    for category in MessageCategory::ALL {
        let pool = pools.message_pool(category);
        check_count(pool.label(), per_category, pool.head(MESSAGE_POOL_LIMIT).len())?;
    }

    let key = PeriodKey::daily(today, format!("{mode}-messages"));
    let seed = key.seed();
    let period_key = key.to_string();
    let day_of_year = today.ordinal();
    let rotation_day = rotation_day(day_of_year);
    let messages_per_day = per_category * MessageCategory::ALL.len();
    let messages_per_month = messages_per_day * ROTATION_CYCLE_DAYS as usize;

    let mut selected = Vec::with_capacity(messages_per_day);
    for category in MessageCategory::ALL {
        let category_index = category.index();
        let shuffled = shuffle(pools.message_pool(category).head(MESSAGE_POOL_LIMIT), seed);

        for slot in 0..per_category {
            let idx = message_index(rotation_day, per_category, slot, category_index, shuffled.len());
            let text = &shuffled[idx];
            let prefix = format!("{}_{}_{}", mode.id_prefix(), category, slot);

            selected.push(ContentItem {
                id: dated_item_id(&prefix, text, today),
                text: text.clone(),
                kind: ContentKind::Messages,
                category: ItemCategory::Message(category),
                mode,
                details: None,
                metadata: ItemMetadata::DailyMessages {
                    period_key: period_key.clone(),
                    seed,
                    day_of_year,
                    rotation_day,
                    category_index,
                    message_index: idx,
                    messages_per_category: per_category,
                    messages_per_day,
                    messages_per_month,
                },
            });
        }
    }

    debug!(
        %mode,
        period_key = %key,
        granularity = ?key.granularity(),
        %seed,
        rotation_day,
        count = selected.len(),
        "selected daily messages"
    );
    Ok(selected)
}
