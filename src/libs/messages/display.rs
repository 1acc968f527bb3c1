//! French wording of every [`Message`].
//!
//! Keeping all texts in one match makes it a compile error to add a message
//! without writing it down.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === BABY MESSAGES ===
            Message::BabyCreated(name) => format!("Bébé « {} » ajouté", name),
            Message::BabyRenamed(name) => format!("Bébé renommé en « {} »", name),
            Message::BabyRemoved(name) => format!("Bébé « {} » supprimé avec tout son historique", name),
            Message::BabyNotFound(id) => format!("Aucun bébé avec l'identifiant {}", id),
            Message::BabySelected(name) => format!("Bébé actif : {}", name),
            Message::BabiesHeader => "Bébés".to_string(),
            Message::NoBabies => "Aucun bébé enregistré. Ajoutez-en un avec `baily baby add <nom>`".to_string(),
            Message::NoBabySelected => "Aucun bébé sélectionné. Utilisez --baby <id> ou `baily baby use <id>`".to_string(),
            Message::ConfirmRemoveBaby(name) => {
                format!("Supprimer « {} » ainsi que tous ses biberons, changes et siestes ?", name)
            }

            // === BOTTLE MESSAGES ===
            Message::BottleCreated(quantity) => format!("Biberon de {}ml ajouté", quantity),
            Message::BottleUpdated => "Biberon modifié".to_string(),
            Message::BottleDeleted => "Biberon supprimé".to_string(),
            Message::BottleNotFound(id) => format!("Aucun biberon avec l'identifiant {}", id),
            Message::BottlesHeader => "🍼 Biberons".to_string(),
            Message::NoBottles => "Aucun biberon".to_string(),
            Message::BottleDayTotal(quantity) => format!("Total : {}ml", quantity),

            // === DIAPER MESSAGES ===
            Message::DiaperCreated => "Change ajoutée".to_string(),
            Message::DiaperUpdated => "Change modifiée".to_string(),
            Message::DiaperDeleted => "Change supprimée".to_string(),
            Message::DiaperNotFound(id) => format!("Aucune change avec l'identifiant {}", id),
            Message::DiapersHeader => "🧷 Changes".to_string(),
            Message::NoDiapers => "Aucune change".to_string(),
            Message::DiaperDayCount(count) => format!("Total : {}", count),

            // === SLEEP MESSAGES ===
            Message::SleepCreated => "Sieste ajoutée".to_string(),
            Message::SleepUpdated => "Sieste modifiée".to_string(),
            Message::SleepDeleted => "Sieste supprimée".to_string(),
            Message::SleepEnded(duration) => format!("Sieste terminée ({})", duration),
            Message::SleepNotFound(id) => format!("Aucune sieste avec l'identifiant {}", id),
            Message::SleepAlreadyEnded(id) => format!("La sieste {} est déjà terminée", id),
            Message::SleepOngoing => "en cours".to_string(),
            Message::SleepsHeader => "😴 Siestes".to_string(),
            Message::NoSleeps => "Aucune sieste".to_string(),
            Message::SleepDayTotal(total) => format!("Total : {}", total),

            // === STATISTICS MESSAGES ===
            Message::WeeklyStatsHeader => "Statistiques par semaine".to_string(),
            Message::NoStats => "Pas encore de statistiques".to_string(),

            // === NOTIFICATION MESSAGES ===
            Message::NotificationCreated => "Notification ajoutée".to_string(),
            Message::NotificationsHeader => "🔔 Notifications".to_string(),
            Message::NoNotifications => "Aucune notification".to_string(),
            Message::NewNotifications(count) => format!("{} nouvelle(s) notification(s)", count),
            Message::NotificationTitleRequired => "Le titre est obligatoire".to_string(),

            // === CONFIRMATION MESSAGES ===
            Message::ConfirmDelete => "Confirmer la suppression ?".to_string(),
            Message::OperationCancelled => "Opération annulée".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration enregistrée".to_string(),
            Message::DefaultBabySaved(name) => format!("{} est maintenant le bébé par défaut", name),
            Message::PromptTimezone => "Fuseau horaire de référence".to_string(),
            Message::PromptDstMode => "Interprétation des heures saisies".to_string(),
            Message::DstModeTimezone => "Base des fuseaux horaires (recommandé)".to_string(),
            Message::DstModeHeuristic => "UTC+2 corrigé selon la saison courante".to_string(),
            Message::PromptHistoryLimit => "Nombre d'entrées affichées dans les listes".to_string(),
            Message::PromptDefaultQuantity => "Quantité de biberon par défaut (ml)".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptOtherDescription => "Description libre".to_string(),
            Message::OtherDescription => "Autre…".to_string(),

            // === TABLE HEADERS ===
            Message::ColumnId => "ID".to_string(),
            Message::ColumnTime => "HEURE".to_string(),
            Message::ColumnQuantity => "QUANTITÉ".to_string(),
            Message::ColumnDescription => "DESCRIPTION".to_string(),
            Message::ColumnStart => "DÉBUT".to_string(),
            Message::ColumnEnd => "FIN".to_string(),
            Message::ColumnDuration => "DURÉE".to_string(),
            Message::ColumnWeek => "SEMAINE".to_string(),
            Message::ColumnDates => "DATES".to_string(),
            Message::ColumnTotal => "TOTAL".to_string(),
            Message::ColumnCount => "NOMBRE".to_string(),
            Message::ColumnName => "NOM".to_string(),
            Message::ColumnCreated => "AJOUTÉ LE".to_string(),
            Message::ColumnTitle => "TITRE".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("{} migration(s) à appliquer", count),
            Message::RunningMigration(version, name) => format!("Migration v{} : {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} appliquée", version),
            Message::MigrationFailed(version, error) => format!("Échec de la migration v{} : {}", version, error),
            Message::AllMigrationsCompleted => "Base de données à jour".to_string(),
            Message::DatabaseUpToDate => "La base de données est à jour".to_string(),
            Message::DatabaseNeedsUpdate => "La base de données doit être migrée".to_string(),
            Message::DatabaseVersion(version) => format!("Version de la base : {}", version),
            Message::MigrationHistory => "Historique des migrations".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{} : {} (appliquée le {})", version, name, applied_at)
            }
        };

        write!(f, "{}", text)
    }
}
