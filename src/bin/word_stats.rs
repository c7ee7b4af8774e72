//! 词频统计 - 对比不同哈希函数和负载因子下的冲突与探测次数

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use env_logger::{Builder, Env};
use probe_hashtable::{
    log_error, log_info, HashAlgorithm, HashFunctionKind, HashSurvey, ProbeError,
    Tokenizer, DEFAULT_INITIAL_CAPACITY,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// input text file; prompts on stdin when omitted
    file: Option<PathBuf>,

    /// maximum load factors to compare, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = [0.7, 0.8, 0.9])]
    load: Vec<f64>,

    /// hash functions to compare: builtin, binary, polynomial
    #[arg(long = "hash", value_delimiter = ',', default_values_t = HashFunctionKind::ALL)]
    hashes: Vec<HashFunctionKind>,

    /// initial slot count of every table
    #[arg(short = 'c', long, default_value_t = DEFAULT_INITIAL_CAPACITY)]
    initial_capacity: usize,

    /// algorithm behind the builtin hash: ahash, xxhash, default
    #[arg(long, default_value_t = HashAlgorithm::AHash)]
    builtin_algorithm: HashAlgorithm,

    /// print Prometheus metrics instead of the text report
    #[arg(long)]
    prometheus: bool,

    /// show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().filter_or("RUST_LOG", level)).init();
}

/// 没有给出文件时从标准输入读取文件名
fn prompt_for_file() -> Result<PathBuf, ProbeError> {
    print!("Enter the file: ");
    io::stdout().flush()?;
    let mut name = String::new();
    io::stdin().read_line(&mut name)?;
    Ok(PathBuf::from(name.trim()))
}

fn run(args: &Args, path: &Path, file: File) -> Result<(), ProbeError> {
    let tokenizer = Tokenizer::shared()?;
    let mut survey = HashSurvey::new(
        &args.load,
        &args.hashes,
        args.initial_capacity,
        args.builtin_algorithm,
    )?;

    for line in BufReader::new(file).lines() {
        for word in tokenizer.tokenize(&line?) {
            survey.observe(&word);
        }
    }
    log_info!("counted {} words from {}", survey.word_count(), path.display());

    if args.prometheus {
        print!("{}", survey.export_prometheus());
    } else {
        print!("{}", survey.report());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let path = match &args.file {
        Some(path) => path.clone(),
        None => match prompt_for_file() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            log_error!("failed to open {}: {}", path.display(), e);
            println!("File {} does not exist...", path.display());
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &path, file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            if let Some(hint) = e.recovery_suggestion() {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
