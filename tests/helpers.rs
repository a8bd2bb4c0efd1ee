use pinlock::tr_key;

#[test]
fn tr_key_localisation_en_es() {
    assert_eq!(tr_key("Enter PIN:", false).as_ref(), "Enter PIN:");
    assert_eq!(tr_key("Enter PIN:", true).as_ref(), "Ingrese el PIN:");

    assert_eq!(tr_key("Accept", false).as_ref(), "Accept");
    assert_eq!(tr_key("Accept", true).as_ref(), "Aceptar");

    assert_eq!(tr_key("Access granted", true).as_ref(), "Acceso concedido");
    assert_eq!(
        tr_key("Authentication Required", true).as_ref(),
        "Autenticación Requerida"
    );

    // Fallback for unknown key
    assert_eq!(tr_key("UnknownKey", false).as_ref(), "UnknownKey");
    assert_eq!(tr_key("UnknownKey", true).as_ref(), "UnknownKey");
}

#[test]
fn error_message_is_one_line() {
    for es in [false, true] {
        let msg = tr_key("Incorrect PIN. Try again.", es);
        assert!(!msg.contains('\n'));
        assert_ne!(msg, tr_key("Enter PIN:", es));
    }
}
