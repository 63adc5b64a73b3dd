use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vayu_timeseries::{paginate, EnvSeries, SeriesStore, READING_LOG_CAPACITY};
use vayu_types::DateRange;

/// 测试序列完整流程：播种 -> 实时追加 -> 切换 -> 分页
#[tokio::test]
async fn test_series_lifecycle() {
    let mut rng = StdRng::seed_from_u64(2001);
    let now = Utc::now();
    let store = SeriesStore::seed_with("HVAC-01", DateRange::Last24h, &mut rng, now);

    // 1. 24h 播种 25 个点，旧→新
    let window = store.chart_snapshot().await;
    assert_eq!(window.len(), 25);
    for pair in window.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }

    // 2. 实时追加：窗口长度恒定，读数日志增长到上限
    for s in 1..=120 {
        store.tick_with(&mut rng, now + Duration::seconds(2 * s)).await;
        assert_eq!(store.chart_snapshot().await.len(), 25);
    }
    assert_eq!(store.readings_len().await, READING_LOG_CAPACITY);

    // 3. 切换设备触发整体重新播种，旧设备无残留
    let reseeded = store.select_with("HVAC-07", DateRange::Last24h, &mut rng, now).await;
    assert!(reseeded);
    let page = store.readings_page(1).await;
    assert!(page.items.iter().all(|r| r.device_id == "HVAC-07"));
    assert_eq!(store.readings_len().await, 25);
}

/// 测试 23 条读数的分页性质
#[test]
fn test_pagination_over_23_readings() {
    let mut rng = StdRng::seed_from_u64(2002);
    let now = Utc::now();
    let mut series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, now);

    // 日志只增不减，取前 23 条做切片性质验证
    for s in 1..=30 {
        series.tick(&mut rng, now + Duration::seconds(2 * s));
    }
    let readings = &series.readings()[..23];

    let page1 = paginate(readings, 1);
    assert_eq!(page1.items.len(), 10);
    assert_eq!(page1.items[..], readings[0..10]);

    let page3 = paginate(readings, 3);
    assert_eq!(page3.items.len(), 3);
    assert_eq!(page3.items[..], readings[20..23]);

    // [1, 3] 之外的页码被钳位
    assert_eq!(paginate(readings, 0).page, 1);
    assert_eq!(paginate(readings, 12).page, 3);
}

/// 测试播种公式与实时公式相互独立
#[test]
fn test_two_generators_stay_distinct() {
    let now = Utc::now();

    let mut rng = StdRng::seed_from_u64(2003);
    let mut series = EnvSeries::seed("HVAC-01", DateRange::Last24h, &mut rng, now);
    let seeded_last = series.window().last().unwrap().clone();

    // 同一瞬间的实时点走的是另一套时间基，拼接处不要求连续
    let appended = series.tick(&mut rng, now);
    assert_eq!(appended.timestamp, seeded_last.timestamp);
    assert_eq!(series.window().len(), 25);
}
