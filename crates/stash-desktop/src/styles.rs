//! Shared styles for the console primitives.

pub const CONSOLE_STYLES: &str = r"
body {
    margin: 0;
    font-family: system-ui, -apple-system, sans-serif;
    font-size: 14px;
    background: #f9fafb;
    color: #111827;
}

.page {
    max-width: 960px;
    margin: 0 auto;
    padding: 24px;
}

.page-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 16px;
}

.page-title {
    margin: 0;
    font-size: 20px;
    font-weight: 600;
}

.page-actions {
    display: flex;
    gap: 8px;
}

.ui-button {
    border-radius: 8px;
    padding: 8px 12px;
    font-size: 13px;
    font-weight: 600;
    border: 1px solid #d1d5db;
    background: #ffffff;
    color: #374151;
}

.ui-button--primary {
    background: #2563eb;
    border-color: #2563eb;
    color: #ffffff;
}

.ui-button:disabled {
    opacity: 0.55;
}

.flash-message {
    border-radius: 8px;
    padding: 10px 12px;
    margin-bottom: 12px;
    border: 1px solid transparent;
}

.flash-message--info { background: #eff6ff; border-color: #bfdbfe; color: #1e3a8a; }
.flash-message--success { background: #ecfdf5; border-color: #a7f3d0; color: #065f46; }
.flash-message--alert { background: #fef2f2; border-color: #fecaca; color: #991b1b; }

.collapsible-panel {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 10px;
    margin-bottom: 10px;
}

.collapsible-panel-header {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 10px 12px;
    cursor: pointer;
}

.collapsible-panel-header-details {
    flex: 1;
    display: flex;
    align-items: center;
    gap: 12px;
}

.collapsible-panel-body {
    border-top: 1px solid #e5e7eb;
    padding: 12px;
}

.header-icon {
    width: 32px;
    height: 32px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 6px;
    background: #f3f4f6;
    color: #9ca3af;
    font-size: 10px;
}

.header-icon img {
    max-width: 100%;
    max-height: 100%;
}

.key-value-pair {
    margin: 0;
    padding: 0;
    list-style: none;
}

.key-value-pair--inline {
    display: flex;
    gap: 16px;
}

.key-value-pair-row {
    display: flex;
    gap: 8px;
    padding: 2px 0;
}

.key-value-pair-key {
    font-weight: 600;
    min-width: 120px;
}

.key-value-pair--inline .key-value-pair-key {
    min-width: 0;
}

.icon-group {
    display: flex;
    gap: 4px;
}

.icon-button {
    border: none;
    background: transparent;
    color: #374151;
    padding: 4px 8px;
    border-radius: 6px;
    cursor: pointer;
}

.icon-button:hover:enabled {
    background: #f3f4f6;
}

.icon-button:disabled {
    opacity: 0.4;
    cursor: not-allowed;
}

.icon-button--delete {
    color: #dc2626;
}
";
