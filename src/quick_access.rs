use crate::data::AUDIO_LESSONS;
use crate::lookup::{LinkLookup, LookupError, LookupResult};
use crate::model::NavigationTile;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Id do único bloco cujo link vem da consulta externa.
pub const AUDIO_TILE_ID: u32 = 4;

/// Quem hospeda o painel: troca a função ativa ou abre links externos.
pub trait Navigation {
    fn set_current_function(&mut self, name: &str);
    fn open_external(&mut self, url: &str);
}

#[derive(Debug)]
pub struct QuickAccessPanel {
    tiles: Vec<NavigationTile>,
    mounted: bool,
    pending: Option<Receiver<LookupResult>>,
}

impl QuickAccessPanel {
    pub fn new(tiles: Vec<NavigationTile>) -> Self {
        Self {
            tiles,
            mounted: false,
            pending: None,
        }
    }

    pub fn tiles(&self) -> &[NavigationTile] {
        &self.tiles
    }

    pub fn tile(&self, id: u32) -> Option<&NavigationTile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Dispara a consulta do link das Áudio-aulas. Só a primeira chamada conta.
    pub fn mount(&mut self, lookup: &dyn LinkLookup) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        log::info!("buscando link de {AUDIO_LESSONS}");
        self.pending = Some(lookup.request(AUDIO_LESSONS));
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Aplica o resultado da consulta, se já chegou. Devolve `true` quando algo mudou.
    pub fn poll(&mut self) -> bool {
        let result = match self.pending.as_ref().map(Receiver::try_recv) {
            None | Some(Err(TryRecvError::Empty)) => return false,
            Some(Ok(result)) => result,
            Some(Err(TryRecvError::Disconnected)) => Err(LookupError::Disconnected),
        };
        self.pending = None;

        match result {
            Ok(link) => {
                log::info!("link de {AUDIO_LESSONS} carregado");
                if let Some(tile) = self.tiles.iter_mut().find(|t| t.id == AUDIO_TILE_ID) {
                    tile.external_link = Some(link);
                }
            }
            Err(err) => {
                // Sem link o bloco continua navegando internamente.
                log::warn!("erro ao buscar link de {AUDIO_LESSONS}: {err}");
            }
        }
        true
    }

    pub fn handle_tile_click(&self, id: u32, nav: &mut dyn Navigation) {
        let Some(tile) = self.tile(id) else {
            return;
        };
        if !tile.active {
            return;
        }
        match tile.external_link() {
            Some(link) => nav.open_external(link),
            None => nav.set_current_function(tile.function_name),
        }
    }
}
