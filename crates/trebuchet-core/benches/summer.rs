use criterion::{Criterion, Throughput, black_box};
use std::{env, time::Duration};
use trebuchet_core::{CalibrationSummer, sum_calibrations, sum_calibrations_bytes};

/// 构造约 64 KiB 的多行输入，混合字母、数字与空行。
fn corpus() -> Vec<u8> {
    let lines: [&[u8]; 5] = [
        b"1abc2",
        b"pqr3stu8vwx",
        b"a1b2c3d4e5f",
        b"treb7uchet",
        b"",
    ];
    let mut data = Vec::with_capacity(64 * 1024);
    let mut index = 0;
    while data.len() < 64 * 1024 {
        data.extend_from_slice(lines[index % lines.len()]);
        data.push(b'\n');
        index += 1;
    }
    data
}

/// 对比一次性求和、流式读取与 4 KiB 分片喂入三条路径的吞吐。
fn bench_summer(c: &mut Criterion) {
    let data = corpus();
    let mut group = c.benchmark_group("calibration_sum");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("bytes", |b| {
        b.iter(|| black_box(sum_calibrations_bytes(black_box(&data)).unwrap()));
    });

    group.bench_function("reader", |b| {
        b.iter(|| black_box(sum_calibrations(black_box(data.as_slice())).unwrap()));
    });

    group.bench_function("chunks_4k", |b| {
        b.iter(|| {
            let mut summer = CalibrationSummer::new();
            for chunk in data.chunks(4096) {
                summer.feed(black_box(chunk)).unwrap();
            }
            black_box(summer.finish().unwrap())
        });
    });

    group.finish();
}

fn main() {
    let mut quick_mode = false;
    for arg in env::args().skip(1) {
        if arg == "--quick" {
            quick_mode = true;
        }
    }

    let mut criterion = Criterion::default();
    if quick_mode {
        criterion = criterion
            .sample_size(10)
            .warm_up_time(Duration::from_millis(100))
            .measurement_time(Duration::from_millis(250));
    }

    bench_summer(&mut criterion);
    criterion.final_summary();
}
