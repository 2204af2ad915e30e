pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// тексты на разных языках
pub const TEXTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../test_data/texts");

/// группа бенчмарков: нормализация каждого текста из папки.
/// $normalize - замыкание, принимающее &str
#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $group: expr, $name: expr, $normalize: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let normalize = $normalize;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (text_name, text) in group::read_dir($dir) {
                group.throughput(criterion::Throughput::Bytes(text.len() as u64));
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    text.as_str(),
                    |b, text| b.iter(|| normalize(criterion::black_box(text))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку с тестовыми текстами
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();

            (name, read(&path, 1))
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// прочитать файл, повторив содержимое times + 1 раз
fn read(source: &std::path::Path, times: usize) -> String
{
    let buffer = std::fs::read_to_string(source).unwrap();

    let mut result = String::with_capacity(buffer.len() * (times + 1));

    for _ in 0 ..= times {
        result.push_str(buffer.as_str());
    }

    result
}
