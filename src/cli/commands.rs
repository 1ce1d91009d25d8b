use makan_rental::catalog::{suggest_cities, Catalog, CatalogError};
use crate::cli::args::{Command, ListArgs, LoginArgs, SearchArgs};
use makan_rental::dashboard::Dashboard;
use makan_rental::interest::{submit_interest, InterestForm};
use makan_rental::listing::{
    BlobUrls, CandidateFile, ListingDraft, ListingWizard, Step, Submission,
};
use makan_rental::models::Property;
use makan_rental::search::{FilterCriteria, SearchResults};
use makan_rental::session::{Credentials, KeyValueStore, MockLoginProvider, SaveToggle, Session};
use crate::settings::Settings;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Everything a command needs: settings, the catalog and the session context
pub struct App<S: KeyValueStore> {
    pub settings: Settings,
    pub catalog: Catalog,
    pub session: Session<S>,
}

pub async fn run<S: KeyValueStore>(app: &mut App<S>, command: Command) -> Result<()> {
    match command {
        Command::Search(args) => search(app, args),
        Command::Show { id, json } => show(app, &id, json),
        Command::Cities { query } => {
            for city in suggest_cities(query.as_deref().unwrap_or_default()) {
                println!("{}", city);
            }
            Ok(())
        }
        Command::Login(args) => login(app, args).await,
        Command::Logout => {
            let route = app.session.logout()?;
            println!("Logged out. Redirecting to {}", route);
            Ok(())
        }
        Command::Whoami => {
            match app.session.user() {
                Some(user) => {
                    println!("{} ({})", user.name, user.id);
                    if let Some(email) = &user.email {
                        println!("   Email: {}", email);
                    }
                    println!("   Saved: {}", user.saved_property_ids.join(", "));
                }
                None => println!("Not logged in"),
            }
            Ok(())
        }
        Command::Save { id } => save(app, &id),
        Command::Dashboard { delete } => dashboard(app, &delete),
        Command::List(args) => list(app, args).map(|_| ()),
        Command::Interest { id, name, phone } => interest(app, &id, name, phone).await,
    }
}

fn print_not_found(e: &CatalogError) {
    let CatalogError::NotFound { id } = e;
    debug!("No property with id {}", id);
    println!("{} Go Home: {}", e, e.link());
}

fn print_property(index: usize, property: &Property, saved: bool) {
    let marker = if saved { " ♥" } else { "" };
    println!(
        "{}. {} (₹{}/mo){}",
        index + 1,
        property.title,
        property.rent,
        marker
    );
    match property.bhk {
        Some(bhk) => println!(
            "   {} BHK {}, {} sq ft, {}",
            bhk, property.property_type, property.area_sq_ft, property.furnishing
        ),
        None => println!(
            "   {}, {} sq ft, {}",
            property.property_type, property.area_sq_ft, property.furnishing
        ),
    }
    println!("   {}, {}", property.address.locality, property.address.city);
    println!("   ID: {}", property.id);
    println!();
}

fn search<S: KeyValueStore>(app: &App<S>, args: SearchArgs) -> Result<()> {
    let mut criteria = match &args.query {
        Some(query) => FilterCriteria::from_query(query),
        None => FilterCriteria::default(),
    };
    if let Some(city) = args.city {
        criteria.city = city;
    }
    if args.any_category {
        criteria.category = None;
    } else if args.category.is_some() {
        criteria.category = args.category;
    }
    if args.property_type.is_some() {
        criteria.property_type = args.property_type;
    }
    if args.any_rent {
        criteria.max_rent = None;
    } else if args.max_rent.is_some() {
        criteria.max_rent = args.max_rent;
    }
    criteria.bhk = args.bhk;
    criteria.bachelor_allowed = args.bachelor;
    criteria.pets_allowed = args.pets;
    debug!("Search criteria: {:?}", criteria);

    let results = SearchResults::run(app.catalog.all(), &criteria);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}\n", results.heading);
    if results.is_empty() {
        println!("No properties found");
        println!("Try adjusting your filters or search in a different city.");
    }
    for (i, property) in results.properties.iter().enumerate() {
        print_property(i, property, app.session.is_saved(&property.id));
    }
    Ok(())
}

fn show<S: KeyValueStore>(app: &App<S>, id: &str, json: bool) -> Result<()> {
    let property = match app.catalog.details(id) {
        Ok(property) => property,
        Err(e) => {
            print_not_found(&e);
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(property)?);
        return Ok(());
    }

    print_property(0, property, app.session.is_saved(&property.id));
    println!("{}", property.description);
    println!("Amenities: {}", property.amenities.join(", "));
    println!(
        "Deposit: ₹{}  Maintenance: {}",
        property.deposit,
        property
            .maintenance
            .map(|m| format!("₹{}", m))
            .unwrap_or_else(|| "included".to_string())
    );
    println!("Available from {}", property.available_date);
    println!(
        "Listed by {} {} on {}{}",
        property.listed_by,
        property.owner_name,
        property.posted_date,
        if property.verified { " (verified)" } else { "" }
    );
    println!("Owner phone is shared once you show interest.");
    Ok(())
}

async fn login<S: KeyValueStore>(app: &mut App<S>, args: LoginArgs) -> Result<()> {
    let credentials = match (args.email, args.password) {
        (Some(email), Some(password)) => Credentials::Email { email, password },
        _ if args.google => Credentials::Google,
        _ => anyhow::bail!("Pass --email and --password, or --google"),
    };

    let provider = MockLoginProvider::new(app.settings.login_delay());
    let user = app.session.login_with(&provider, &credentials).await?;
    println!("Logged in as {} ({})", user.name, user.id);
    Ok(())
}

fn save<S: KeyValueStore>(app: &mut App<S>, id: &str) -> Result<()> {
    if let Err(e) = app.catalog.details(id) {
        print_not_found(&e);
        return Ok(());
    }

    match app.session.toggle_save(id)? {
        SaveToggle::Saved => println!("Saved property {}", id),
        SaveToggle::Unsaved => println!("Removed property {} from saved", id),
        SaveToggle::LoginRequired => println!("Please login to save properties (makan login)."),
    }
    Ok(())
}

fn dashboard<S: KeyValueStore>(app: &App<S>, delete: &[String]) -> Result<()> {
    let mut dashboard = match Dashboard::open(&app.session, &app.catalog) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    for id in delete {
        if !dashboard.delete(id) {
            warn!("No listing {} to delete", id);
        }
    }

    let stats = dashboard.stats();
    println!("Welcome back, {}", dashboard.user().name);
    println!("Total listings: {}  Saved properties: {}\n", stats.listings, stats.saved);

    println!("My Listings");
    for (i, property) in dashboard.my_listings().iter().enumerate() {
        print_property(i, property, false);
    }

    println!("Saved Properties");
    let saved = dashboard.saved();
    if saved.is_empty() {
        println!("No saved properties yet");
    }
    for (i, property) in saved.iter().enumerate() {
        print_property(i, property, true);
    }
    Ok(())
}

fn read_draft(path: &std::path::Path) -> Result<ListingDraft> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse draft {}", path.display()))
}

/// Walk the wizard non-interactively. Returns the submission when publishing went through.
fn list<S: KeyValueStore>(app: &App<S>, args: ListArgs) -> Result<Option<Submission>> {
    let urls = BlobUrls::new();
    let started = match &args.edit {
        Some(id) => {
            let dashboard = match Dashboard::open(&app.session, &app.catalog) {
                Ok(dashboard) => dashboard,
                Err(e) => {
                    println!("{}", e);
                    return Ok(None);
                }
            };
            match dashboard.listing(id) {
                Some(property) => ListingWizard::edit(&app.session, property, urls),
                None => {
                    println!("Listing {} is not one of yours.", id);
                    return Ok(None);
                }
            }
        }
        None => ListingWizard::start(&app.session, urls),
    };
    let mut wizard = match started {
        Ok(wizard) => wizard,
        Err(e) => {
            println!("{} Run `makan login` first.", e);
            return Ok(None);
        }
    };

    if let Some(path) = &args.draft {
        let mut draft = read_draft(path)?;
        if draft.owner_name.trim().is_empty() {
            draft.owner_name = wizard.draft().owner_name.clone();
        }
        if draft.owner_phone.trim().is_empty() {
            draft.owner_phone = wizard.draft().owner_phone.clone();
        }
        *wizard.draft_mut() = draft;
    }
    wizard.draft_mut().terms_accepted = args.accept_terms;

    while wizard.step() != Step::Photos {
        let current = wizard.step();
        if let Err(e) = wizard.next() {
            println!("Step {}: {}", current.number(), e);
            return Ok(None);
        }
    }

    let files = args
        .photos
        .iter()
        .map(|path| CandidateFile::from_path(path))
        .collect::<Result<Vec<_>>>()?;
    let outcome = wizard.photos_mut().stage(&files);
    info!(
        "Staged {} photos ({} rejected)",
        outcome.accepted, outcome.rejected
    );
    if let Some(warning) = outcome.warning {
        println!("⚠️  {}", warning);
    }
    println!("Selected Photos ({}/5)", wizard.photos().len());

    match wizard.submit() {
        Ok(submission) => {
            println!("{}", submission.message);
            println!("Redirecting to {}", submission.redirect);
            Ok(Some(submission))
        }
        Err(e) => {
            println!("⚠️  {}", e);
            Ok(None)
        }
    }
}

async fn interest<S: KeyValueStore>(
    app: &mut App<S>,
    id: &str,
    name: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let property = match app.catalog.details(id) {
        Ok(property) => property,
        Err(e) => {
            print_not_found(&e);
            return Ok(());
        }
    };

    let mut form = InterestForm::for_user(app.session.user());
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(phone) = phone {
        form.phone = phone;
    }

    let delay = app.settings.interest_delay();
    match submit_interest(&mut app.session, property, &form, delay).await {
        Ok(receipt) => {
            println!("Interest Sent!");
            println!("{}", receipt.message);
            println!("Owner: {} ({})", receipt.owner_name, receipt.owner_phone);
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use makan_rental::listing::Mode;
    use makan_rental::models::User;
    use makan_rental::session::MemoryStore;
    use std::path::{Path, PathBuf};

    fn app(store: MemoryStore) -> App<MemoryStore> {
        App {
            settings: Settings {
                data_dir: PathBuf::from("unused"),
                log_level: "info".to_string(),
                login_delay_ms: 0,
                interest_delay_ms: 0,
            },
            catalog: Catalog::sample(),
            session: Session::load(store).unwrap(),
        }
    }

    fn logged_in(store: MemoryStore) -> App<MemoryStore> {
        let mut app = app(store);
        app.session
            .login(User {
                id: "user_cli".to_string(),
                name: "Nisha".to_string(),
                email: None,
                phone: Some("9222222222".to_string()),
                avatar: None,
                saved_property_ids: Vec::new(),
            })
            .unwrap();
        app
    }

    fn write_photos(dir: &Path, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.join(format!("room{}.jpg", i));
                std::fs::write(&path, [0u8; 64]).unwrap();
                path
            })
            .collect()
    }

    fn list_args(draft: Option<PathBuf>, photos: Vec<PathBuf>) -> ListArgs {
        ListArgs {
            draft,
            edit: None,
            photos,
            accept_terms: true,
        }
    }

    #[test]
    fn list_fills_missing_contact_from_the_user() {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("draft.json");
        std::fs::write(
            &draft,
            r#"{"title":"Quiet 2 BHK","bhk":2,"area":950,"rent":18000,"ownerName":""}"#,
        )
        .unwrap();
        let photos = write_photos(dir.path(), 3);
        let app = logged_in(MemoryStore::new());

        let submission = list(&app, list_args(Some(draft), photos)).unwrap().unwrap();
        assert_eq!(submission.mode, Mode::Create);
        assert_eq!(submission.draft.title, "Quiet 2 BHK");
        assert_eq!(submission.draft.owner_name, "Nisha");
        assert_eq!(submission.draft.owner_phone, "9222222222");
        assert_eq!(submission.images.len(), 3);
        assert_eq!(submission.redirect, "/dashboard");
    }

    #[test]
    fn list_with_two_photos_does_not_publish() {
        let dir = tempfile::tempdir().unwrap();
        let draft = dir.path().join("draft.json");
        std::fs::write(&draft, r#"{"title":"Shop","category":"Commercial","area":300,"rent":40000}"#)
            .unwrap();
        let photos = write_photos(dir.path(), 2);
        let app = logged_in(MemoryStore::new());

        assert!(list(&app, list_args(Some(draft), photos)).unwrap().is_none());
    }

    #[test]
    fn list_stops_at_the_first_incomplete_step() {
        let app = logged_in(MemoryStore::new());
        assert!(list(&app, list_args(None, Vec::new())).unwrap().is_none());
    }

    #[test]
    fn list_edit_prefills_from_own_listing() {
        let dir = tempfile::tempdir().unwrap();
        let app = logged_in(MemoryStore::new());
        let args = ListArgs {
            edit: Some("1".to_string()),
            ..list_args(None, write_photos(dir.path(), 1))
        };

        let submission = list(&app, args).unwrap().unwrap();
        assert_eq!(
            submission.mode,
            Mode::Edit {
                property_id: "1".to_string()
            }
        );
        assert_eq!(submission.images.len(), 4);

        let args = ListArgs {
            edit: Some("3".to_string()),
            ..list_args(None, Vec::new())
        };
        assert!(list(&app, args).unwrap().is_none());
    }

    #[tokio::test]
    async fn save_command_persists_and_toggles() {
        let store = MemoryStore::new();
        let mut app = logged_in(store.clone());

        run(&mut app, Command::Save { id: "2".to_string() }).await.unwrap();
        assert!(app.session.is_saved("2"));
        assert!(Session::load(store.clone()).unwrap().is_saved("2"));

        run(&mut app, Command::Save { id: "2".to_string() }).await.unwrap();
        assert!(!app.session.is_saved("2"));

        run(&mut app, Command::Save { id: "999".to_string() }).await.unwrap();
        assert!(app.session.user().unwrap().saved_property_ids.is_empty());
    }

    #[tokio::test]
    async fn save_command_logged_out_only_opens_prompt() {
        let store = MemoryStore::new();
        let mut app = app(store.clone());

        run(&mut app, Command::Save { id: "1".to_string() }).await.unwrap();
        assert!(app.session.is_login_prompt_open());
        assert!(!Session::load(store).unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn login_then_logout_round_trips_through_storage() {
        let store = MemoryStore::new();
        let mut app = app(store.clone());

        run(&mut app, Command::Login(LoginArgs {
            email: None,
            password: None,
            google: true,
        }))
        .await
        .unwrap();
        assert!(Session::load(store.clone()).unwrap().is_authenticated());

        run(&mut app, Command::Logout).await.unwrap();
        assert!(!Session::load(store).unwrap().is_authenticated());
    }
}
