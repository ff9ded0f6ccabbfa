use std::io::{self, BufRead, Write};

use crate::cli::parser::{Commands, FieldArgs};
use crate::config::Config;
use crate::core::auth::{AllowList, AuthGate, StaticAllowList};
use crate::core::submit::{Submission, SubmitLogic};
use crate::core::validate::Validator;
use crate::errors::{AppError, AppResult};
use crate::models::field::{Field, FieldGroup, FieldKind};
use crate::models::form::FormInput;
use crate::models::row::SubmissionId;
use crate::models::session::Session;
use crate::sheet::{AppendClient, RowStore, open_store};
use crate::ui::messages::{error, header, info, success, validation_report, warning};
use crate::ui::prompt::Prompter;
use crate::ui::summary::{render_row, render_summary};
use crate::utils::date;

/// Options of one `submit` run.
pub struct SubmitOptions<'a> {
    pub user: Option<&'a str>,
    pub fields: &'a FieldArgs,
    pub no_input: bool,
    pub dry_run: bool,
}

/// Handle the `submit` command.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        user,
        fields,
        no_input,
        dry_run,
    } = cmd
    {
        // misconfiguration is fatal before anyone is asked anything
        cfg.validate()?;

        let gate = AuthGate::new(StaticAllowList::new(
            cfg.allow_list.clone(),
            cfg.login_case_sensitive,
        ));
        let validator = Validator::new(cfg.schema, cfg.personnel.clone())
            .with_date_order(cfg.enforce_date_order);
        let mut logic = SubmitLogic::new(validator, AppendClient::new(open_store(cfg)?));

        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());

        let opts = SubmitOptions {
            user: user.as_deref(),
            fields,
            no_input: *no_input,
            dry_run: *dry_run,
        };
        run(&opts, &gate, &mut logic, &mut prompter)?;
    }

    Ok(())
}

/// Login, then submit job entries until the user stops.
pub fn run<A, S, R, W>(
    opts: &SubmitOptions<'_>,
    gate: &AuthGate<A>,
    logic: &mut SubmitLogic<S>,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()>
where
    A: AllowList,
    S: RowStore,
    R: BufRead,
    W: Write,
{
    header("📋 Site Job Entry Form");

    let session = login(opts, gate, prompter)?;
    let username = session.username().unwrap_or_default().to_string();
    success(format!("Logged in as {}", username));

    let schema = logic.validator().schema();
    let personnel = logic.validator().personnel().to_vec();
    let provided = opts.fields.provided();

    let mut first = true;
    loop {
        let today = date::today();
        let mut form = FormInput::with_defaults(schema, &personnel, today);

        // flags only prefill the first form; later ones start from defaults
        let mut pending: Vec<Field> = schema.fields();
        if first {
            for (field, value) in &provided {
                if !schema.has_equipment() && field.group() == FieldGroup::Equipment {
                    warning(format!(
                        "--{} ignored: schema {} has no equipment columns",
                        field.name().replace('_', "-"),
                        schema
                    ));
                    continue;
                }
                form.set(*field, value.clone());
            }
            pending.retain(|f| !provided.iter().any(|(p, _)| p == f));
        }
        first = false;

        if !opts.no_input {
            fill(prompter, &mut form, &pending, &personnel)?;
        }

        let submission = submit_form(opts, &session, logic, prompter, &mut form, &personnel)?;
        report(&submission, &logic.client().target());

        if opts.no_input || !prompter.confirm("Submit another job?", false)? {
            break;
        }
    }

    Ok(())
}

fn login<A, R, W>(
    opts: &SubmitOptions<'_>,
    gate: &AuthGate<A>,
    prompter: &mut Prompter<R, W>,
) -> AppResult<Session>
where
    A: AllowList,
    R: BufRead,
    W: Write,
{
    let mut session = Session::anonymous();
    let mut given = opts.user.map(str::to_string);

    loop {
        let identifier = match given.take() {
            Some(id) => id,
            None if opts.no_input => {
                return Err(AppError::Cancelled(
                    "--user is required with --no-input".to_string(),
                ));
            }
            None => prompter.ask("🔐 Login", "")?,
        };

        match gate.attempt(&mut session, &identifier) {
            Ok(()) => return Ok(session),
            Err(e) => {
                error(&e);
                if opts.no_input {
                    return Err(e.into());
                }
            }
        }
    }
}

/// Submit one filled form. Invalid fields are asked again; a failed append
/// may be resubmitted unchanged, under the same submission id.
fn submit_form<S, R, W>(
    opts: &SubmitOptions<'_>,
    session: &Session,
    logic: &mut SubmitLogic<S>,
    prompter: &mut Prompter<R, W>,
    form: &mut FormInput,
    personnel: &[String],
) -> AppResult<Submission>
where
    S: RowStore,
    R: BufRead,
    W: Write,
{
    let id = SubmissionId::new();

    loop {
        match logic.submit(session, form, id, date::today(), opts.dry_run) {
            Ok(submission) => return Ok(submission),
            Err(AppError::Validation(errors)) => {
                validation_report(&errors);
                if opts.no_input {
                    return Err(AppError::Validation(errors));
                }
                let mut invalid: Vec<Field> = errors.iter().map(|e| e.field()).collect();
                invalid.dedup();
                fill(prompter, form, &invalid, personnel)?;
            }
            Err(AppError::Append(e)) => {
                error(format!("Submission failed: {}", e));
                info("Your entries are kept; nothing was retried automatically.");
                if opts.no_input || !prompter.confirm("Resubmit the same entry?", true)? {
                    return Err(AppError::Append(e));
                }
            }
            Err(other) => return Err(other),
        }
    }
}

/// Prompt for `fields`, showing the current value as the default answer.
fn fill<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    form: &mut FormInput,
    fields: &[Field],
    personnel: &[String],
) -> AppResult<()> {
    let mut group = None;
    for &field in fields {
        if group != Some(field.group()) {
            group = Some(field.group());
            header(field.group().title());
        }

        let current = form.get(field).to_string();
        let value = match field.kind() {
            FieldKind::Person => prompter.choose(field.label(), personnel, &current)?,
            FieldKind::Date => prompter.ask(&format!("{} (YYYY-MM-DD)", field.label()), &current)?,
            FieldKind::Text | FieldKind::Count => prompter.ask(field.label(), &current)?,
        };
        form.set(field, value);
    }
    Ok(())
}

fn report(submission: &Submission, target: &str) {
    if submission.appended {
        success(format!("Form submitted successfully to {}", target));
    } else {
        info("Dry run: nothing was appended. Row that would be written:");
        println!("{}", render_row(&submission.row));
    }

    header("📄 Summary");
    println!("{}", render_summary(&submission.summary));
    log::debug!("submission {} done", submission.id);
}
