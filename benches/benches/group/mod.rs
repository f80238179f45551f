use criterion::measurement::WallTime;
use criterion::BenchmarkGroup;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// общие настройки групп бенчмарков
pub fn configure(group: &mut BenchmarkGroup<WallTime>)
{
    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));
}
