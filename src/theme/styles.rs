//! Global CSS styles for the storefront.
//!
//! Class names match the ones emitted by `storefront-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f7f7f5;
  --surface: #ffffff;
  --border: #e4e4e0;

  --brand: #1d6f5f;
  --brand-dark: #155246;
  --accent: #f2a900;

  --text-primary: #1c1c1c;
  --text-secondary: #5c5c5c;
  --text-muted: #9a9a9a;

  --success: #2e8b57;
  --danger: #d64545;
  --warning: #e08a00;
  --info: #3d6fd6;

  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  --sidebar-width: 400px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

.store.scroll-locked {
  height: 100vh;
  overflow: hidden;
}

/* === Header === */
.store-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  padding: 1rem 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  position: sticky;
  top: 0;
  z-index: 10;
}

.store-title {
  font-size: 1.4rem;
  font-weight: 700;
  color: var(--brand);
  text-decoration: none;
}

.store-nav {
  display: flex;
  gap: 1rem;
  flex: 1;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
}

.nav-link:hover {
  color: var(--brand);
}

.store-main {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem;
}

.page-title {
  font-size: 1.8rem;
  margin-bottom: 1.5rem;
}

/* === Buttons === */
.btn-primary, .add-to-cart {
  background: var(--brand);
  color: #fff;
  border: none;
  border-radius: 6px;
  padding: 0.6rem 1.2rem;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast);
  text-decoration: none;
}

.btn-primary:hover, .add-to-cart:hover {
  background: var(--brand-dark);
}

.btn-primary:disabled, .add-to-cart:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-qty {
  width: 28px;
  height: 28px;
  border: 1px solid var(--border);
  border-radius: 4px;
  background: var(--surface);
  cursor: pointer;
}

.btn-qty:hover {
  border-color: var(--brand);
  color: var(--brand);
}

.btn-danger {
  background: transparent;
  border: none;
  color: var(--danger);
  cursor: pointer;
  font-size: 1.1rem;
}

.icon-btn {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 1.5rem;
  line-height: 1;
  color: var(--text-secondary);
}

/* === Cart Toggle & Badge === */
.cart-toggle {
  position: relative;
  background: transparent;
  border: none;
  font-size: 1.6rem;
  cursor: pointer;
}

.cart-count {
  position: absolute;
  top: -6px;
  right: -10px;
  min-width: 20px;
  height: 20px;
  padding: 0 6px;
  border-radius: 10px;
  background: var(--accent);
  color: #fff;
  font-size: 0.75rem;
  font-weight: 700;
  line-height: 20px;
  text-align: center;
}

.cart-count.hidden {
  display: none;
}

.cart-count.bounce {
  animation: cartBounce 0.5s ease;
}

@keyframes cartBounce {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.3); }
}

/* === Sidebar === */
.cart-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.4);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
  z-index: 20;
}

.cart-overlay.active {
  opacity: 1;
  visibility: visible;
}

.cart-sidebar {
  position: fixed;
  top: 0;
  right: calc(-1 * var(--sidebar-width));
  width: var(--sidebar-width);
  max-width: 100vw;
  height: 100vh;
  display: flex;
  flex-direction: column;
  background: var(--surface);
  box-shadow: -4px 0 16px rgba(0, 0, 0, 0.12);
  transition: right var(--transition-normal);
  z-index: 30;
}

.cart-sidebar.active {
  right: 0;
}

.cart-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.cart-items {
  flex: 1;
  overflow-y: auto;
  padding: 0.5rem 1.25rem;
}

.cart-empty {
  flex: 1;
  padding: 3rem 1.25rem;
  text-align: center;
  color: var(--text-muted);
}

.cart-item {
  display: grid;
  grid-template-columns: 56px 1fr auto auto;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 0;
  border-bottom: 1px solid var(--border);
}

.cart-item-image img {
  width: 56px;
  height: 56px;
  object-fit: cover;
  border-radius: 6px;
}

.cart-item-image i {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 56px;
  height: 56px;
  border-radius: 6px;
  background: var(--bg);
  color: var(--brand);
}

.cart-item-name {
  font-weight: 600;
}

.cart-item-price {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.cart-item-controls {
  display: flex;
  align-items: center;
  gap: 0.4rem;
}

.qty-display {
  min-width: 1.5rem;
  text-align: center;
}

.cart-footer {
  padding: 1rem 1.25rem;
  border-top: 1px solid var(--border);
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.cart-total-row {
  display: flex;
  justify-content: space-between;
  font-size: 1.1rem;
  font-weight: 700;
}

/* === Products === */
.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.25rem;
}

.product-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1.25rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 10px;
}

.product-media {
  font-size: 2rem;
  color: var(--brand);
}

.product-media img {
  width: 100%;
  border-radius: 6px;
}

.product-price {
  font-size: 1.2rem;
  font-weight: 700;
}

.product-stock {
  font-size: 0.85rem;
  color: var(--success);
}

.product-stock.sold-out {
  color: var(--danger);
}

.product-id-input {
  display: flex;
  gap: 0.75rem;
}

.input-field {
  flex: 1;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font: inherit;
}

.shop-hint, .checkout-loading, .checkout-empty {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

/* === Checkout === */
.checkout-lines {
  width: 100%;
  border-collapse: collapse;
  margin-bottom: 1.5rem;
}

.checkout-lines td {
  padding: 0.6rem 0;
  border-bottom: 1px solid var(--border);
}

.checkout-lines .qty, .checkout-lines .price {
  text-align: right;
}

.checkout-summary {
  display: grid;
  grid-template-columns: 1fr auto;
  row-gap: 0.4rem;
  max-width: 360px;
  margin-left: auto;
}

.checkout-summary .total {
  font-weight: 700;
  font-size: 1.2rem;
  border-top: 1px solid var(--border);
  padding-top: 0.4rem;
}

.checkout-error, .startup-error p {
  color: var(--danger);
}

.startup-error {
  padding: 3rem;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 40;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  min-width: 260px;
  padding: 0.75rem 1rem;
  border-radius: 8px;
  color: #fff;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
  animation: toastIn 0.25s ease;
}

.toast-success { background: var(--success); }
.toast-error { background: var(--danger); }
.toast-warning { background: var(--warning); }
.toast-info { background: var(--info); }

@keyframes toastIn {
  from { transform: translateY(12px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@media (prefers-reduced-motion: reduce) {
  .cart-count.bounce, .toast {
    animation: none;
  }
  .cart-sidebar, .cart-overlay {
    transition: none;
  }
}
"#;
