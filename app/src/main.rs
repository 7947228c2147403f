use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

use pcd_converter::{Converter, PointCloudConverter, TrajectoryConverter};
use pcd_viewer::PlyViewer;

#[derive(Parser, Debug)]
#[command(
    name = "slam2ply",
    about = "Convert SLAM map points and trajectories to PLY and view them",
    author = "MIERUNE Inc.",
    version = "0.0.1"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map points (`x, y, z` rows after a header line) to a vertex-only PLY
    Map {
        #[arg(short, long, required = true, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, default_value = "out.ply", value_name = "FILE")]
        output: PathBuf,

        /// Open the result in a viewer window
        #[arg(long)]
        view: bool,
    },
    /// KITTI poses with a leading image path to a colored PLY of camera positions
    Trajectory {
        #[arg(short, long, required = true, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, default_value = "out_trajectory.ply", value_name = "FILE")]
        output: PathBuf,

        /// Open the result in a viewer window
        #[arg(long)]
        view: bool,
    },
    /// Show one or more ASCII PLY files in a single window
    View {
        #[arg(required = true, num_args = 1.., value_name = "PLY")]
        files: Vec<PathBuf>,
    },
}

fn convert(
    converter: &dyn Converter,
    input: &Path,
    output: &Path,
    view: bool,
) -> pcd_core::Result<()> {
    log::info!("input file: {:?}", input);
    log::info!("output file: {:?}", output);

    let start = std::time::Instant::now();
    let count = converter.convert(input, output)?;
    log::info!("converted {} vertices in {:?}", count, start.elapsed());

    if view {
        PlyViewer::default().load_and_render(output)?;
    }
    Ok(())
}

fn run(cli: Cli) -> pcd_core::Result<()> {
    match cli.command {
        Command::Map {
            input,
            output,
            view,
        } => convert(&PointCloudConverter, &input, &output, view),
        Command::Trajectory {
            input,
            output,
            view,
        } => convert(&TrajectoryConverter::new(), &input, &output, view),
        Command::View { files } => {
            log::info!("input files: {:?}", files);
            PlyViewer::default().load_and_render_all(&files)
        }
    }
}

fn main() -> ExitCode {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Cli::parse();

    match run(args) {
        Ok(()) => {
            log::info!("Finish processing");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_map_defaults() {
        let cli = Cli::try_parse_from(["slam2ply", "map", "-i", "PointCloud.txt"]).unwrap();
        match cli.command {
            Command::Map {
                input,
                output,
                view,
            } => {
                assert_eq!(input, PathBuf::from("PointCloud.txt"));
                assert_eq!(output, PathBuf::from("out.ply"));
                assert!(!view);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_trajectory_defaults() {
        let cli =
            Cli::try_parse_from(["slam2ply", "trajectory", "--input", "traj.txt", "--view"])
                .unwrap();
        match cli.command {
            Command::Trajectory { output, view, .. } => {
                assert_eq!(output, PathBuf::from("out_trajectory.ply"));
                assert!(view);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_view_requires_a_file() {
        assert!(Cli::try_parse_from(["slam2ply", "view"]).is_err());
    }
}
