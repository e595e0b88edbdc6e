use super::*;
use crate::quick_access::AUDIO_TILE_ID;

impl LexApp {
    /// Montagem do painel: dispara a consulta do link uma única vez.
    pub fn ensure_mounted(&mut self) {
        self.quick_access.mount(self.lookup.as_ref());
    }

    /// Chamado a cada frame. Devolve `true` se a consulta ainda está pendente.
    pub fn poll_lookup(&mut self) -> bool {
        self.quick_access.poll();
        self.quick_access.is_loading()
    }

    pub fn click_tile(&mut self, id: u32) {
        self.quick_access.handle_tile_click(id, &mut self.nav);
    }

    pub fn audio_link(&self) -> Option<&str> {
        self.quick_access
            .tile(AUDIO_TILE_ID)
            .and_then(|t| t.external_link())
    }
}
