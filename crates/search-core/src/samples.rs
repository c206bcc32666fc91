// search-core/src/samples.rs
//! Bundled sample procedures used to seed a fresh installation

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::models::NewProcedure;
use crate::store::FsStore;

pub struct Sample {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub filename: &'static str,
    pub order: i64,
    pub content: &'static str,
}

pub static SAMPLES: &[Sample] = &[
    Sample {
        name: "Comandi Docker",
        icon: "🐳",
        description: "Gestione container e immagini Docker",
        filename: "docker.txt",
        order: 1,
        content: "[Comandi Base]
Gestione fondamentale di Docker

COMANDO: Lista container attivi
docker ps

COMANDO: Lista tutti i container
docker ps -a

COMANDO: Lista immagini
docker images

COMANDO: Rimuovi container
docker rm <container_id>

[Gestione Container]
Avvio, stop e riavvio dei container

COMANDO: Avvia container
docker start <container_id>

COMANDO: Ferma container
docker stop <container_id>

COMANDO: Logs in tempo reale
docker logs -f <container_id>
",
    },
    Sample {
        name: "Comandi Linux",
        icon: "🐧",
        description: "Comandi essenziali per amministrazione Linux",
        filename: "linux.txt",
        order: 2,
        content: "[Gestione File]
Operazioni su file e directory

COMANDO: Lista dettagliata
ls -lah

COMANDO: Copia ricorsiva
cp -r /sorgente /destinazione

COMANDO: Trova file
find /path -name \"*.txt\"

[Monitoraggio Sistema]
Verifica risorse e processi

COMANDO: Utilizzo disco
df -h

COMANDO: Memoria RAM
free -h

COMANDO: Processi attivi
top
",
    },
    Sample {
        name: "Comandi Git",
        icon: "🔀",
        description: "Controllo versione e gestione repository",
        filename: "git.txt",
        order: 3,
        content: "[Operazioni Base]
Comandi fondamentali Git

COMANDO: Inizializza repository
git init

COMANDO: Stato modifiche
git status

COMANDO: Aggiungi tutti i file
git add .

COMANDO: Commit
git commit -m \"messaggio\"

[Sincronizzazione]
Push e pull con remote

COMANDO: Push su main
git push origin main

COMANDO: Pull da remote
git pull origin main
",
    },
];

/// What happened to one sample during installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleInstall {
    pub filename: &'static str,
    pub file_created: bool,
    pub record_created: bool,
}

/// Write missing sample files and register missing catalog records.
///
/// Existing files and records with the same file name are left untouched.
pub fn install_samples(
    store: &FsStore,
    catalog: &mut Catalog,
    owner: Option<&str>,
) -> Result<Vec<SampleInstall>, StoreError> {
    let mut installed = Vec::with_capacity(SAMPLES.len());

    for sample in SAMPLES {
        let file_created = if store.exists(sample.filename)? {
            false
        } else {
            store.create(sample.filename, sample.content.as_bytes())?;
            true
        };

        let record_created = if catalog.find_by_filename(sample.filename).is_some() {
            false
        } else {
            catalog.insert(NewProcedure {
                name: sample.name.to_string(),
                icon: sample.icon.to_string(),
                description: sample.description.to_string(),
                filename: sample.filename.to_string(),
                order: Some(sample.order),
                owner: owner.map(String::from),
                is_public: true,
            });
            true
        };

        installed.push(SampleInstall {
            filename: sample.filename,
            file_created,
            record_created,
        });
    }

    Ok(installed)
}
