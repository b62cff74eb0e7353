use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a Terraform state file as an HTML report")]
pub struct Cli {
    /// Terraform state file location
    #[arg(long)]
    pub tfstate: PathBuf,

    /// Path and name of the html file to create (e.g /tmp/myoutput.html)
    #[arg(long, default_value = "tfdoc.html")]
    pub out: PathBuf,

    /// Name of the report
    #[arg(long, default_value = "Terraform Output")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_tfstate_flag_required() {
        let result = Cli::try_parse_from(["tfdoc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_for_out_and_name() {
        let cli = Cli::parse_from(["tfdoc", "--tfstate", "terraform.tfstate"]);
        assert_eq!(cli.tfstate, PathBuf::from("terraform.tfstate"));
        assert_eq!(cli.out, PathBuf::from("tfdoc.html"));
        assert_eq!(cli.name, "Terraform Output");
    }

    #[test]
    fn test_all_flags_set() {
        let cli = Cli::parse_from([
            "tfdoc",
            "--tfstate=prod.tfstate",
            "--out=/tmp/report.html",
            "--name=Production",
        ]);
        assert_eq!(cli.tfstate, PathBuf::from("prod.tfstate"));
        assert_eq!(cli.out, PathBuf::from("/tmp/report.html"));
        assert_eq!(cli.name, "Production");
    }
}
