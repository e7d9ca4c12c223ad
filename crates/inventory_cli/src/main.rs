//! Command-line probe over `inventory_core`.
//!
//! # Responsibility
//! - Wire config, logging, storage, and services the way an embedding app would.
//! - Print every result as JSON on stdout.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use inventory_core::db::open_db;
use inventory_core::{
    core_version, init_logging, InventoryConfig, LogService, LogType, MaterialRawMaterial,
    MaterialRawMaterialRepository, MaterialRequest, MaterialService, RawMaterial,
    RawMaterialService, SqliteAuditLogRepository, SqliteMaterialRawMaterialRepository,
    SqliteMaterialRepository, SqliteRawMaterialRepository,
};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "inventory",
    version,
    about = "Material inventory maintenance tool"
)]
struct Cli {
    /// TOML config file (defaults to ./inventory.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Material CRUD.
    #[command(subcommand)]
    Material(MaterialCommand),
    /// Raw material store.
    #[command(subcommand)]
    RawMaterial(RawMaterialCommand),
    /// Link a material to one of its raw materials.
    Link {
        materialid: String,
        rawmaterialid: String,
    },
    /// Show audit log entries.
    Logs {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the core version.
    Version,
}

#[derive(Debug, Subcommand)]
enum MaterialCommand {
    List,
    Inventory,
    Get {
        id: String,
    },
    Create(MaterialArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: MaterialArgs,
    },
    Delete {
        id: String,
    },
    RawMaterials {
        id: String,
    },
}

#[derive(Debug, Args)]
struct MaterialArgs {
    /// Ignored by `update`, which always keeps the positional id.
    #[arg(long = "id")]
    materialid: Option<String>,
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, default_value_t = 0.0)]
    price: f64,
    #[arg(long)]
    density: Option<f64>,
}

impl From<MaterialArgs> for MaterialRequest {
    fn from(value: MaterialArgs) -> Self {
        Self {
            materialid: value.materialid,
            name: value.name,
            description: value.description,
            price: value.price,
            density: value.density,
        }
    }
}

#[derive(Debug, Subcommand)]
enum RawMaterialCommand {
    Add {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        vendor: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Command::Version = cli.command {
        println!("{}", core_version());
        return Ok(());
    }

    let config = InventoryConfig::load(cli.config.as_deref()).context("loading config")?;
    init_logging(&config.logging).context("initializing logging")?;
    info!("event=cli_start module=cli status=ok");

    let conn = open_db(&config.database.path)
        .with_context(|| format!("opening database `{}`", config.database.path.display()))?;

    let log = LogService::new(SqliteAuditLogRepository::new(&conn));
    let raw_materials = RawMaterialService::new(SqliteRawMaterialRepository::new(&conn), &log);
    let materials = MaterialService::new(
        SqliteMaterialRepository::new(&conn),
        SqliteMaterialRawMaterialRepository::new(&conn),
        &raw_materials,
        &log,
    );

    match cli.command {
        Command::Material(command) => match command {
            MaterialCommand::List => print_json(&materials.get_all_material()?),
            MaterialCommand::Inventory => print_json(&materials.get_all_materials_in_inventory()?),
            MaterialCommand::Get { id } => match materials.get_material_by_id(&id)? {
                Some(material) => print_json(&material),
                None => bail!("material `{id}` not found"),
            },
            MaterialCommand::Create(fields) => {
                print_json(&materials.create_material(fields.into())?)
            }
            MaterialCommand::Update { id, fields } => {
                print_json(&materials.update_material(&id, fields.into())?)
            }
            MaterialCommand::Delete { id } => {
                materials.delete_material(&id)?;
                print_json(&serde_json::json!({ "status": "success", "materialid": id }))
            }
            MaterialCommand::RawMaterials { id } => {
                print_json(&materials.get_all_material_raw_material(&id)?)
            }
        },
        Command::RawMaterial(command) => match command {
            RawMaterialCommand::Add {
                id,
                name,
                vendor,
                price,
            } => {
                let mut raw_material = RawMaterial::new(id, name, price);
                raw_material.vendor = vendor;
                print_json(&raw_materials.create_raw_material(&raw_material)?)
            }
            RawMaterialCommand::List => print_json(&raw_materials.get_all_raw_materials()?),
        },
        Command::Link {
            materialid,
            rawmaterialid,
        } => {
            let row = MaterialRawMaterial::new(materialid, rawmaterialid);
            SqliteMaterialRawMaterialRepository::new(&conn).link(&row)?;
            print_json(&row)
        }
        Command::Logs { category } => {
            let category = match category.as_deref() {
                Some(value) => match LogType::parse(value) {
                    Some(kind) => Some(kind),
                    None => bail!("unknown log category `{value}`"),
                },
                None => None,
            };
            print_json(&log.list_logs(category)?)
        }
        Command::Version => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
