use clap::{Parser, Subcommand};

use guidechop::nuclease::PamSpec;
use guidechop::{DesignMode, TargetDesign, TargetSpec};

/// Guidechop CLI
#[derive(Parser)]
#[command(name = "guidechop")]
#[command(version)]
#[command(about = "CRISPR gRNA design: PAM scanning, structure ranking, tiling, primers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all supported nuclease systems
    ListSystems,

    /// Describe a system by name or menu number (e.g. "SpCas9" or "1")
    Describe {
        /// System to describe
        id: String,
    },

    /// Design knockout guides and primers for a target sequence
    Design {
        /// System name or menu number
        #[arg(long)]
        system: String,
        /// Target DNA sequence (ACGT, at least 30 nt; lowercase accepted)
        #[arg(long)]
        sequence: String,
        /// Number of guides to request (the scan may return fewer)
        #[arg(long, default_value_t = 4)]
        count: usize,
        /// Gene label used in primer names
        #[arg(long, default_value = "target")]
        name: String,
        /// Skip the backbone vector primers in the output
        #[arg(long)]
        no_backbone: bool,
    },

    /// Tile guides across a target at a fixed spacing
    Tile {
        /// System name or menu number
        #[arg(long)]
        system: String,
        /// Target DNA sequence (ACGT, at least 30 nt; lowercase accepted)
        #[arg(long)]
        sequence: String,
        /// Nucleotides between consecutive tile starts
        #[arg(long)]
        spacing: usize,
        /// Gene label used in primer names
        #[arg(long, default_value = "target")]
        name: String,
        /// Skip the backbone vector primers in the output
        #[arg(long)]
        no_backbone: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ListSystems => {
            cmd_list_systems();
        }

        Commands::Describe { id } => {
            cmd_describe(&id)?;
        }

        Commands::Design {
            system,
            sequence,
            count,
            name,
            no_backbone,
        } => {
            if count == 0 {
                anyhow::bail!("--count must be positive");
            }
            let design = run_design(&system, &sequence, name, DesignMode::Knockout { count })?;
            print_design(&design, !no_backbone);
        }

        Commands::Tile {
            system,
            sequence,
            spacing,
            name,
            no_backbone,
        } => {
            if spacing == 0 {
                anyhow::bail!("--spacing must be positive");
            }
            let design = run_design(&system, &sequence, name, DesignMode::Tiled { spacing })?;
            print_design(&design, !no_backbone);
        }
    }

    Ok(())
}

fn run_design(
    system: &str,
    sequence: &str,
    name: String,
    mode: DesignMode,
) -> anyhow::Result<TargetDesign> {
    let sys = guidechop::get_system(system)?;
    let target = TargetSpec {
        name,
        sequence: sequence.to_ascii_uppercase(),
    };
    let design = guidechop::design_target(sys, &target, mode)?;
    eprintln!(
        "design: system={} | mode={:?} | target={} ({} nt) | guides={}",
        sys.name,
        mode,
        design.name,
        target.sequence.len(),
        design.guides.len()
    );
    Ok(design)
}

fn pam_summary(pam: &PamSpec) -> String {
    match pam {
        PamSpec::ThreePrime { motifs, gap } => {
            format!("{} ({}N gap, 3' of spacer)", motifs.join("/"), gap)
        }
        PamSpec::FivePrime { motifs, gap } => {
            format!("{} ({}N gap, 5' of spacer)", motifs.join("/"), gap)
        }
        PamSpec::PamFree => "none (structure-ranked)".to_owned(),
    }
}

fn cmd_list_systems() {
    for sys in guidechop::list_supported_systems() {
        println!(
            "{}. {:<10} spacer={:<2} pam={}",
            sys.id.menu_number(),
            sys.name,
            sys.spacer_length,
            pam_summary(&sys.pam),
        );
    }
}

fn cmd_describe(id: &str) -> anyhow::Result<()> {
    let sys = guidechop::get_system(id)?;
    println!("name: {}", sys.name);
    println!("menu number: {}", sys.id.menu_number());
    println!("pam: {}", pam_summary(&sys.pam));
    println!("spacer length: {}", sys.spacer_length);
    println!("scaffold ({} nt): {}", sys.scaffold.len(), sys.scaffold);
    if !sys.terminator.is_empty() {
        println!("terminator: {}", sys.terminator);
    }
    println!("scaffold source: {}", sys.provenance.citation);
    println!("notes: {}", sys.provenance.notes);
    Ok(())
}

fn print_design(design: &TargetDesign, with_backbone: bool) {
    if with_backbone {
        let backbone = guidechop::backbone_primers();
        println!("backbone_fwd\t{}", backbone.forward);
        println!("backbone_rev\t{}", backbone.reverse);
    }
    for (k, d) in design.guides.iter().enumerate() {
        let x = k + 1;
        println!("{}_gRNA{}\t{}", design.name, x, d.guide.sequence);
        println!("{}_gRNA{}_fwd\t{}", design.name, x, d.primers.forward);
        println!("{}_gRNA{}_rev\t{}", design.name, x, d.primers.reverse);
        println!("{}_gRNA{}_pcr\t{}", design.name, x, d.amplicon);
    }
}
