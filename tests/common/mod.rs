//! Common test utilities for integration tests

use armp_notices::config::ResolvedConfig;
use armp_notices::models::Strategy;

/// French result page: one fully labelled notice and one item without labels.
#[allow(dead_code)]
pub const FRENCH_PAGE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head><title>Recherche avancée</title></head>
<body>
<ul class="list-group">
  <li class="list-group-item">
    <strong>AVIS D'APPEL D'OFFRES N°001/AONO/CUD/2025
    </strong>
    <div class="d-table w-100">
      <div class="d-table-row"><div class="d-table-cell">Type:</div><div class="d-table-cell">AO</div></div>
      <div class="d-table-row"><div class="d-table-cell">MO/AC:</div><div class="d-table-cell">Communauté Urbaine de Douala</div></div>
      <div class="d-table-row"><div class="d-table-cell">PO/CA:</div><div class="d-table-cell">Douala City Council</div></div>
      <div class="d-table-row"><div class="d-table-cell">Région:</div><div class="d-table-cell">Littoral</div></div>
      <div class="d-table-row"><div class="d-table-cell">Montant:</div><div class="d-table-cell text-right">150 000 000 FCFA</div></div>
      <div class="d-table-row"><div class="d-table-cell">Publié le :</div><div class="d-table-cell">03/03/2025</div></div>
      <div class="d-table-row"><div class="d-table-cell">Date de clôture :</div><div class="d-table-cell">15/03/2025</div></div>
      <div class="d-table-row"><div class="d-table-cell">Heure de clôture :</div><div class="d-table-cell">10:00</div></div>
    </div>
  </li>
  <li class="list-group-item">
    <strong>COMMUNIQUE N°12</strong>
    <p>Aucun détail</p>
  </li>
</ul>
</body>
</html>"#;

/// English result page carrying country and funding rows as well.
#[allow(dead_code)]
pub const ENGLISH_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<body>
<ul class="list-group">
  <li class="list-group-item">
    <strong>INVITATION TO TENDER No. 045/ITT/MINTP/2025</strong>
    <div class="d-table w-100">
      <div class="d-table-row"><div class="d-table-cell">Type:</div><div class="d-table-cell">ITT</div></div>
      <div class="d-table-row"><div class="d-table-cell">MO/AC:</div><div class="d-table-cell">Ministère des Travaux Publics</div></div>
      <div class="d-table-row"><div class="d-table-cell">PO/CA:</div><div class="d-table-cell">Ministry of Public Works</div></div>
      <div class="d-table-row"><div class="d-table-cell">Region:</div><div class="d-table-cell">Centre</div></div>
      <div class="d-table-row"><div class="d-table-cell">Country:</div><div class="d-table-cell">Cameroon</div></div>
      <div class="d-table-row"><div class="d-table-cell">Amount:</div><div class="d-table-cell">2 500 000 000 FCFA</div></div>
      <div class="d-table-row"><div class="d-table-cell">Financing Type:</div><div class="d-table-cell">BIP</div></div>
      <div class="d-table-row"><div class="d-table-cell">Published on:</div><div class="d-table-cell">01/03/2025</div></div>
      <div class="d-table-row"><div class="d-table-cell">Closing date:</div><div class="d-table-cell">15/03/2025</div></div>
      <div class="d-table-row"><div class="d-table-cell">Closing time:</div><div class="d-table-cell">13:00</div></div>
    </div>
  </li>
</ul>
</body>
</html>"#;

/// Configuration using `strategy` and every other default.
#[allow(dead_code)]
pub fn config_for(strategy: Strategy) -> ResolvedConfig {
    ResolvedConfig {
        strategy,
        ..ResolvedConfig::default()
    }
}
