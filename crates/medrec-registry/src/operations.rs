//! The default operation set: one row per operation of the invocation
//! surface, mirroring the original contract names (`CreateAsset`,
//! `ReadPatient`, `InitLedger`, ...). Arguments arrive as strings in router
//! order; integer fields are parsed here, at the edge.

use serde::Serialize;
use serde_json::Value;

use medrec_types::{Asset, Doctor, Patient, Prescription};

use crate::context::RepositoryContext;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::{Effect, Operation, Registry};

fn check_arity(operation: &'static str, expected: usize, args: &[String]) -> RegistryResult<()> {
    if args.len() != expected {
        return Err(RegistryError::BadArity {
            operation,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn parse_int(operation: &'static str, argument: &'static str, raw: &str) -> RegistryResult<i64> {
    raw.parse().map_err(|e: std::num::ParseIntError| {
        RegistryError::InvalidArgument {
            operation,
            argument,
            reason: e.to_string(),
        }
    })
}

fn to_json<T: Serialize>(value: &T) -> RegistryResult<Value> {
    Ok(serde_json::to_value(value)?)
}

impl Registry {
    /// Build a registry carrying the full default operation surface over the
    /// given repositories.
    pub fn with_default_operations(ctx: &RepositoryContext) -> Self {
        let mut registry = Self::new();
        register_asset_operations(&mut registry, ctx);
        register_patient_operations(&mut registry, ctx);
        register_doctor_operations(&mut registry, ctx);
        register_prescription_operations(&mut registry, ctx);
        registry
    }
}

fn register_asset_operations(registry: &mut Registry, ctx: &RepositoryContext) {
    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "AssetExists",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("AssetExists", 1, args)?;
            Ok(Value::Bool(repo.exists(&args[0])?))
        }),
    ));

    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "CreateAsset",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("CreateAsset", 5, args)?;
            let size = parse_int("CreateAsset", "size", &args[2])?;
            let appraised_value = parse_int("CreateAsset", "appraisedValue", &args[4])?;
            let created = repo.create(Asset::new(
                &args[0],
                &args[1],
                size,
                &args[3],
                appraised_value,
            ))?;
            to_json(&created)
        }),
    ));

    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "ReadAsset",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("ReadAsset", 1, args)?;
            to_json(&repo.read(&args[0])?)
        }),
    ));

    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "UpdateAsset",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("UpdateAsset", 5, args)?;
            let size = parse_int("UpdateAsset", "size", &args[2])?;
            let appraised_value = parse_int("UpdateAsset", "appraisedValue", &args[4])?;
            let updated = repo.update(Asset::new(
                &args[0],
                &args[1],
                size,
                &args[3],
                appraised_value,
            ))?;
            to_json(&updated)
        }),
    ));

    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "DeleteAsset",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("DeleteAsset", 1, args)?;
            repo.delete(&args[0])?;
            Ok(Value::Null)
        }),
    ));

    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "TransferAsset",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("TransferAsset", 2, args)?;
            let previous_owner = repo.transfer(&args[0], &args[1])?;
            Ok(Value::String(previous_owner))
        }),
    ));

    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "GetAllAssets",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("GetAllAssets", 0, args)?;
            to_json(&repo.list_all()?)
        }),
    ));

    let repo = ctx.assets.clone();
    registry.register(Operation::new(
        "InitLedger",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("InitLedger", 0, args)?;
            repo.seed()?;
            Ok(Value::Null)
        }),
    ));
}

fn register_patient_operations(registry: &mut Registry, ctx: &RepositoryContext) {
    let repo = ctx.patients.clone();
    registry.register(Operation::new(
        "PatientExists",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("PatientExists", 1, args)?;
            Ok(Value::Bool(repo.exists(&args[0])?))
        }),
    ));

    let repo = ctx.patients.clone();
    registry.register(Operation::new(
        "CreatePatient",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("CreatePatient", 6, args)?;
            let created = repo.create(Patient::new(
                &args[0], &args[1], &args[2], &args[3], &args[4], &args[5],
            ))?;
            to_json(&created)
        }),
    ));

    let repo = ctx.patients.clone();
    registry.register(Operation::new(
        "ReadPatient",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("ReadPatient", 1, args)?;
            to_json(&repo.read(&args[0])?)
        }),
    ));

    let repo = ctx.patients.clone();
    registry.register(Operation::new(
        "DeletePatient",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("DeletePatient", 1, args)?;
            repo.delete(&args[0])?;
            Ok(Value::Null)
        }),
    ));

    let repo = ctx.patients.clone();
    registry.register(Operation::new(
        "GetAllPatients",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("GetAllPatients", 0, args)?;
            to_json(&repo.list_all()?)
        }),
    ));

    let repo = ctx.patients.clone();
    registry.register(Operation::new(
        "InitLedgerPatient",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("InitLedgerPatient", 0, args)?;
            repo.seed()?;
            Ok(Value::Null)
        }),
    ));
}

fn register_doctor_operations(registry: &mut Registry, ctx: &RepositoryContext) {
    let repo = ctx.doctors.clone();
    registry.register(Operation::new(
        "DoctorExists",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("DoctorExists", 1, args)?;
            Ok(Value::Bool(repo.exists(&args[0])?))
        }),
    ));

    let repo = ctx.doctors.clone();
    registry.register(Operation::new(
        "CreateDoctor",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("CreateDoctor", 6, args)?;
            let created = repo.create(Doctor::new(
                &args[0], &args[1], &args[2], &args[3], &args[4], &args[5],
            ))?;
            to_json(&created)
        }),
    ));

    let repo = ctx.doctors.clone();
    registry.register(Operation::new(
        "ReadDoctor",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("ReadDoctor", 1, args)?;
            to_json(&repo.read(&args[0])?)
        }),
    ));

    let repo = ctx.doctors.clone();
    registry.register(Operation::new(
        "DeleteDoctor",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("DeleteDoctor", 1, args)?;
            repo.delete(&args[0])?;
            Ok(Value::Null)
        }),
    ));

    let repo = ctx.doctors.clone();
    registry.register(Operation::new(
        "GetAllDoctors",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("GetAllDoctors", 0, args)?;
            to_json(&repo.list_all()?)
        }),
    ));
}

fn register_prescription_operations(registry: &mut Registry, ctx: &RepositoryContext) {
    let repo = ctx.prescriptions.clone();
    registry.register(Operation::new(
        "PrescriptionExists",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("PrescriptionExists", 1, args)?;
            Ok(Value::Bool(repo.exists(&args[0])?))
        }),
    ));

    let repo = ctx.prescriptions.clone();
    registry.register(Operation::new(
        "CreatePrescription",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("CreatePrescription", 5, args)?;
            let created = repo.create(Prescription::new(
                &args[0], &args[1], &args[2], &args[3], &args[4],
            ))?;
            to_json(&created)
        }),
    ));

    let repo = ctx.prescriptions.clone();
    registry.register(Operation::new(
        "ReadPrescription",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("ReadPrescription", 1, args)?;
            to_json(&repo.read(&args[0])?)
        }),
    ));

    let repo = ctx.prescriptions.clone();
    registry.register(Operation::new(
        "DeletePrescription",
        Effect::Mutating,
        Box::new(move |args| {
            check_arity("DeletePrescription", 1, args)?;
            repo.delete(&args[0])?;
            Ok(Value::Null)
        }),
    ));

    let repo = ctx.prescriptions.clone();
    registry.register(Operation::new(
        "GetAllPrescriptions",
        Effect::ReadOnly,
        Box::new(move |args| {
            check_arity("GetAllPrescriptions", 0, args)?;
            to_json(&repo.list_all()?)
        }),
    ));
}
