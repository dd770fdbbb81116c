use crate::models::bucket::Bucket;
use crate::models::day_group::DayGroup;
use crate::models::day_summary::{DailyAggregate, Totals};

/// Sum one day's activities per bucket. `None` (a day without records)
/// yields an all-zero aggregate with `has_activity == false`.
pub fn aggregate(group: Option<&DayGroup>) -> DailyAggregate {
    let mut agg = DailyAggregate::default();

    let Some(group) = group else {
        return agg;
    };

    agg.has_activity = true;

    for activity in &group.activities {
        let totals = Totals {
            minutes: activity.duration,
            distance: activity.distance,
        };

        match activity.bucket() {
            Bucket::Walk => agg.walk += totals,
            Bucket::Bicycle => agg.bicycle += totals,
            Bucket::Drive => agg.drive += totals,
            Bucket::Passenger => agg.passenger += totals,
            Bucket::Unclassified => agg.unclassified += 1,
        }
    }

    agg
}
