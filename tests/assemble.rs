use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Rgba, RgbaImage};
use tempfile::TempDir;

use gif_assembler_lib::processing::Gifsicle;
use gif_assembler_lib::utils::ValidationError;
use gif_assembler_lib::{
    AssemblerError, AssemblySettings, AssemblyTask, FrameOrder, assemble_gif,
};

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

struct Fixture {
    _root: TempDir,
    input: PathBuf,
    output: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("frames");
        std::fs::create_dir(&input).unwrap();
        let output = root.path().join("output.gif");
        Self { _root: root, input, output }
    }

    fn add_frame(&self, name: &str, color: [u8; 4]) {
        let mut img = RgbaImage::from_pixel(6, 4, Rgba(color));
        // A second color keeps frames from being flat fills
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.save(self.input.join(name)).unwrap();
    }

    fn task(&self, settings: AssemblySettings) -> AssemblyTask {
        AssemblyTask::new(&self.input, &self.output, settings)
    }
}

fn no_optimize() -> AssemblySettings {
    let mut settings = AssemblySettings::default();
    settings.optimize.enabled = false;
    settings
}

fn by_name(mut settings: AssemblySettings) -> AssemblySettings {
    settings.order = FrameOrder::Name;
    settings
}

fn decode_frames(path: &Path) -> Vec<RgbaImage> {
    let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();
    decoder
        .into_frames()
        .collect_frames()
        .unwrap()
        .into_iter()
        .map(|f| f.into_buffer())
        .collect()
}

#[cfg(unix)]
fn fake_optimizer(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("fake-gifsicle");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn gifsicle_installed() -> bool {
    std::process::Command::new("gifsicle")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

#[tokio::test]
async fn one_frame_per_image() {
    let fx = Fixture::new();
    fx.add_frame("00000.png", RED);
    fx.add_frame("00001.png", GREEN);
    fx.add_frame("00002.png", BLUE);

    let report = assemble_gif(fx.task(no_optimize())).await.unwrap();

    assert_eq!(report.frame_count, 3);
    assert_eq!((report.width, report.height), (6, 4));
    assert!(!report.optimized);
    assert_eq!(report.encoded_size, std::fs::metadata(&fx.output).unwrap().len());
    assert_eq!(decode_frames(&fx.output).len(), 3);
}

#[tokio::test]
async fn subdirectories_are_not_frames() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    fx.add_frame("b.png", GREEN);
    let nested = fx.input.join("nested");
    std::fs::create_dir(&nested).unwrap();
    RgbaImage::from_pixel(6, 4, Rgba(BLUE)).save(nested.join("c.png")).unwrap();

    let report = assemble_gif(fx.task(no_optimize())).await.unwrap();

    assert_eq!(report.frame_count, 2);
    assert_eq!(decode_frames(&fx.output).len(), 2);
}

#[tokio::test]
async fn name_order_is_respected() {
    let fx = Fixture::new();
    fx.add_frame("b.png", GREEN);
    fx.add_frame("c.png", BLUE);
    fx.add_frame("a.png", RED);

    assemble_gif(fx.task(by_name(no_optimize()))).await.unwrap();

    let colors: Vec<_> = decode_frames(&fx.output)
        .iter()
        .map(|f| f.get_pixel(3, 2).0)
        .collect();
    assert_eq!(colors, [RED, GREEN, BLUE]);
}

#[tokio::test]
async fn ppm_frames_are_decoded() {
    let fx = Fixture::new();
    for (i, rgb) in [[10u8, 20, 30], [200, 100, 50]].iter().enumerate() {
        let mut ppm = b"P6\n2 2\n255\n".to_vec();
        for _ in 0..4 {
            ppm.extend_from_slice(rgb);
        }
        std::fs::write(fx.input.join(format!("{i:0>5}.ppm")), ppm).unwrap();
    }

    let report = assemble_gif(fx.task(by_name(no_optimize()))).await.unwrap();

    assert_eq!(report.frame_count, 2);
    let frames = decode_frames(&fx.output);
    assert_eq!(frames[1].get_pixel(1, 1).0, [200, 100, 50, 255]);
}

#[tokio::test]
async fn empty_directory_fails_without_output() {
    let fx = Fixture::new();

    let err = assemble_gif(fx.task(no_optimize())).await.unwrap_err();

    assert!(matches!(err, AssemblerError::EmptyInput(ref p) if p == &fx.input));
    assert!(!fx.output.exists());
}

#[tokio::test]
async fn undecodable_file_fails_before_writing() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    std::fs::write(fx.input.join("b.png"), "definitely not a png").unwrap();
    std::fs::write(&fx.output, b"previous run").unwrap();

    let err = assemble_gif(fx.task(no_optimize())).await.unwrap_err();

    assert!(matches!(err, AssemblerError::Decode { ref path, .. } if path.ends_with("b.png")));
    assert_eq!(std::fs::read(&fx.output).unwrap(), b"previous run");
}

#[tokio::test]
async fn mismatched_frame_sizes_fail() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    RgbaImage::from_pixel(3, 3, Rgba(GREEN)).save(fx.input.join("b.png")).unwrap();

    let err = assemble_gif(fx.task(by_name(no_optimize()))).await.unwrap_err();

    assert!(matches!(
        err,
        AssemblerError::DimensionMismatch { expected: (6, 4), found: (3, 3), .. }
    ));
    assert!(!fx.output.exists());
}

#[tokio::test]
async fn missing_input_directory_is_a_validation_error() {
    let fx = Fixture::new();
    let task = AssemblyTask::new(fx.input.join("missing"), &fx.output, no_optimize());

    let err = assemble_gif(task).await.unwrap_err();
    assert!(matches!(err, AssemblerError::Validation(_)));
}

#[tokio::test]
async fn delay_finer_than_gif_resolution_is_rejected_before_writing() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);

    for delay in [5, 15, 99] {
        let mut settings = no_optimize();
        settings.frame_delay_ms = delay;
        let err = assemble_gif(fx.task(settings)).await.unwrap_err();
        assert!(matches!(err, AssemblerError::Validation(ValidationError::Settings(_))));
    }
    assert!(!fx.output.exists());

    let mut settings = no_optimize();
    settings.frame_delay_ms = 70;
    assemble_gif(fx.task(settings)).await.unwrap();
    let decoder = GifDecoder::new(BufReader::new(File::open(&fx.output).unwrap())).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames[0].delay().numer_denom_ms(), (70, 1));
}

#[tokio::test]
async fn rerun_overwrites_with_identical_output() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    fx.add_frame("b.png", BLUE);

    assemble_gif(fx.task(by_name(no_optimize()))).await.unwrap();
    let first = std::fs::read(&fx.output).unwrap();
    assemble_gif(fx.task(by_name(no_optimize()))).await.unwrap();
    let second = std::fs::read(&fx.output).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_optimizer_fails_after_encoding() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    let mut settings = AssemblySettings::default();
    settings.optimize.program = fx.input.join("no-such-gifsicle");

    let err = assemble_gif(fx.task(settings)).await.unwrap_err();

    assert!(matches!(err, AssemblerError::OptimizerUnavailable(_)));
    // The encode step already produced the GIF
    assert_eq!(decode_frames(&fx.output).len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn optimizer_runs_in_place_on_the_output() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    fx.add_frame("b.png", GREEN);
    let scratch = tempfile::tempdir().unwrap();
    let log = scratch.path().join("args.txt");
    let program = fake_optimizer(
        scratch.path(),
        &format!(r#"printf '%s\n' "$@" > "{}""#, log.display()),
    );

    let mut settings = by_name(AssemblySettings::default());
    settings.optimize.program = program;
    let before_frames = {
        let mut plain = settings.clone();
        plain.optimize.enabled = false;
        assemble_gif(fx.task(plain)).await.unwrap();
        decode_frames(&fx.output)
    };

    let report = assemble_gif(fx.task(settings)).await.unwrap();

    assert!(report.optimized);
    assert_eq!(report.saved_bytes, 0);
    let args = std::fs::read_to_string(&log).unwrap();
    let args: Vec<_> = args.lines().collect();
    assert_eq!(args, ["--batch", "-O1", fx.output.to_str().unwrap()]);
    assert_eq!(decode_frames(&fx.output), before_frames);
}

#[cfg(unix)]
#[tokio::test]
async fn failing_optimizer_aborts_the_run() {
    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    let scratch = tempfile::tempdir().unwrap();
    let mut settings = AssemblySettings::default();
    settings.optimize.program = fake_optimizer(scratch.path(), "echo 'corrupt' >&2; exit 1");

    let err = assemble_gif(fx.task(settings)).await.unwrap_err();

    assert!(matches!(
        err,
        AssemblerError::OptimizerFailed { status: Some(1), ref stderr } if stderr == "corrupt"
    ));
}

fn gradient_frame(dir: &Path, name: &str, blue: u8) {
    let img = RgbaImage::from_fn(16, 12, |x, y| Rgba([x as u8 * 16, y as u8 * 20, blue, 255]));
    img.save(dir.join(name)).unwrap();
}

#[tokio::test]
async fn optimizer_keeps_frames_with_more_than_256_colors_in_total() {
    let fx = Fixture::new();
    gradient_frame(&fx.input, "a.png", 0);
    gradient_frame(&fx.input, "b.png", 255);

    assemble_gif(fx.task(by_name(no_optimize()))).await.unwrap();
    let before = decode_frames(&fx.output);
    let distinct: std::collections::HashSet<_> =
        before.iter().flat_map(|f| f.pixels().map(|p| p.0)).collect();
    assert_eq!(distinct.len(), 384);

    // A global palette cap would have to merge colors across the two frames
    let args = Gifsicle::new(AssemblySettings::default().optimize).args(&fx.output);
    assert!(!args.iter().any(|a| a == "--colors"));

    if !gifsicle_installed() {
        eprintln!("gifsicle not installed, skipping the real optimizer run");
        return;
    }
    assemble_gif(fx.task(by_name(AssemblySettings::default()))).await.unwrap();
    assert_eq!(decode_frames(&fx.output), before);
}

#[tokio::test]
async fn gifsicle_keeps_frame_content() {
    if !gifsicle_installed() {
        eprintln!("gifsicle not installed, skipping");
        return;
    }

    let fx = Fixture::new();
    fx.add_frame("a.png", RED);
    fx.add_frame("b.png", GREEN);
    fx.add_frame("c.png", BLUE);

    assemble_gif(fx.task(by_name(no_optimize()))).await.unwrap();
    let before = decode_frames(&fx.output);

    let report = assemble_gif(fx.task(by_name(AssemblySettings::default()))).await.unwrap();
    let after = decode_frames(&fx.output);

    assert!(report.optimized);
    assert_eq!(report.optimized_size, std::fs::metadata(&fx.output).unwrap().len());
    assert_eq!(before, after);
}
