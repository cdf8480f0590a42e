use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::course::CourseListing;
use crate::models::job::JobListing;
use crate::models::user::{EmployerProfile, Profile, Role, User};
use crate::store::ListingStore;
use crate::utils::crypto::hash_password;

const DEMO_PASSWORD: &str = "password";

/// Seeds the store with the demo data set shown to first-time visitors:
/// two employers, six job offers and six courses. Idempotence is not
/// needed since the store starts empty on every boot.
pub fn seed_demo_data(store: &ListingStore) -> Result<()> {
    let password_hash = hash_password(DEMO_PASSWORD)?;

    let constructions = demo_employer(
        "contact@ccc.com",
        &password_hash,
        "Conakry Constructions Co.",
        Some("BTP"),
        Some("Leader de la construction en Guinée."),
    );
    let eaux_kindia = demo_employer(
        "contact@sek.com",
        &password_hash,
        "Services des Eaux de Kindia",
        Some("Services"),
        Some("Distribution et maintenance des eaux."),
    );

    let jobs = [
        demo_job(
            constructions.id,
            "Électricien Agréé pour Projets Résidentiels",
            "Électricité",
            "Conakry, Guinée",
            "Temps plein",
            "Conakry Constructions Co.",
            "electrician working",
        ),
        demo_job(
            eaux_kindia.id,
            "Technicien en Plomberie",
            "Plomberie",
            "Kindia, Guinée",
            "Contrat",
            "Services des Eaux de Kindia",
            "plumber pipes",
        ),
        demo_job(
            constructions.id,
            "Spécialiste en Installation de CVC",
            "CVC",
            "Labé, Guinée",
            "Temps plein",
            "Fouta Climate Control",
            "hvac system",
        ),
        demo_job(
            eaux_kindia.id,
            "Menuisier pour la Fabrication de Meubles",
            "Menuiserie",
            "Nzérékoré, Guinée",
            "Temps partiel",
            "Forêt Fine Woods",
            "carpenter workshop",
        ),
        demo_job(
            eaux_kindia.id,
            "Maçon pour Fondations de Bâtiments",
            "Maçonnerie",
            "Kankan, Guinée",
            "Temps plein",
            "Groupe de Construction Mandingue",
            "masonry construction",
        ),
        demo_job(
            constructions.id,
            "Mécanicien Automobile",
            "Mécanique",
            "Boké, Guinée",
            "Temps plein",
            "Boké Auto Repair",
            "auto mechanic",
        ),
    ];

    let courses = [
        demo_course(
            "Câblage Électrique Avancé",
            "Électricité",
            "6 semaines",
            true,
            "Institut Technique de Conakry",
            "electrical classroom",
        ),
        demo_course(
            "Techniques Modernes de Plomberie",
            "Plomberie",
            "4 semaines",
            true,
            "École Professionnelle de Kindia",
            "plumbing class",
        ),
        demo_course(
            "Menuiserie et Ébénisterie Professionnelles",
            "Menuiserie",
            "8 semaines",
            true,
            "Artisans de Guinée, Labé",
            "woodworking class",
        ),
        demo_course(
            "Introduction à l'Installation de Panneaux Solaires",
            "Énergie renouvelable",
            "3 semaines",
            false,
            "Académie Solaire de Boké",
            "solar panels",
        ),
        demo_course(
            "Gestion de Petites Entreprises pour Artisans",
            "Entreprise",
            "5 semaines",
            true,
            "École de Commerce de Conakry",
            "business meeting",
        ),
        demo_course(
            "Bases de la Soudure et de la Fabrication Métallique",
            "Soudure",
            "6 semaines",
            true,
            "Collège Technique de Kankan",
            "welding sparks",
        ),
    ];

    store.insert_user(constructions);
    store.insert_user(eaux_kindia);
    for job in jobs {
        store.insert_job(job);
    }
    for course in courses {
        store.insert_course(course);
    }

    tracing::info!("Seeded demo data: 2 employers, 6 jobs, 6 courses");
    Ok(())
}

fn demo_employer(
    email: &str,
    password_hash: &str,
    company_name: &str,
    sector: Option<&str>,
    description: Option<&str>,
) -> User {
    User {
        id: Uuid::new_v4(),
        role: Role::Employer,
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        profile: Profile::Employer(EmployerProfile {
            company_name: company_name.to_string(),
            sector: sector.map(str::to_string),
            description: description.map(str::to_string),
            website: None,
        }),
        created_at: Utc::now(),
    }
}

fn demo_job(
    employer_id: Uuid,
    title: &str,
    category: &str,
    location: &str,
    job_type: &str,
    company: &str,
    image_hint: &str,
) -> JobListing {
    JobListing {
        id: Uuid::new_v4(),
        employer_id,
        title: title.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        job_type: job_type.to_string(),
        company: company.to_string(),
        image_url: "/logo.png".to_string(),
        image_hint: Some(image_hint.to_string()),
        description: None,
    }
}

fn demo_course(
    title: &str,
    category: &str,
    duration: &str,
    has_certification: bool,
    provider: &str,
    image_hint: &str,
) -> CourseListing {
    CourseListing {
        title: title.to_string(),
        category: category.to_string(),
        duration: duration.to_string(),
        has_certification,
        provider: provider.to_string(),
        image_url: "/logo.png".to_string(),
        image_hint: Some(image_hint.to_string()),
    }
}
