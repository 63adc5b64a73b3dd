use rand::Rng;

/// 历史播种公式
///
/// `i` 为回溯的小时数（i=0 最新）；周期基线加均匀噪声：
/// temperature = 20 + 3·sin(i/12) + U(0,2)
/// humidity    = 50 + 15·cos(i/8) + U(0,5)
/// co2         = 400 + 200·sin(i/6) + U(0,100)
pub fn seed_values(hours_back: i64, rng: &mut impl Rng) -> (f64, f64, f64) {
    let i = hours_back as f64;
    let temperature = 20.0 + 3.0 * (i / 12.0).sin() + rng.gen_range(0.0..2.0);
    let humidity = 50.0 + 15.0 * (i / 8.0).cos() + rng.gen_range(0.0..5.0);
    let co2 = 400.0 + 200.0 * (i / 6.0).sin() + rng.gen_range(0.0..100.0);
    (temperature, humidity, co2)
}

/// 实时追加公式
///
/// 基线以墙钟毫秒数除以固定常数（1_000_000 / 800_000 / 600_000）驱动。
/// 与播种公式是两套时间基，拼接处不要求数值连续，保留为两个独立的生成器
pub fn live_values(unix_ms: i64, rng: &mut impl Rng) -> (f64, f64, f64) {
    let ms = unix_ms as f64;
    let temperature = 20.0 + 3.0 * (ms / 1_000_000.0).sin() + rng.gen_range(0.0..2.0);
    let humidity = 50.0 + 15.0 * (ms / 800_000.0).cos() + rng.gen_range(0.0..5.0);
    let co2 = 400.0 + 200.0 * (ms / 600_000.0).sin() + rng.gen_range(0.0..100.0);
    (temperature, humidity, co2)
}
